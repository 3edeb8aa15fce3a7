pub const HASH_SIZE: usize = 32;
pub const HASH_HEX_SIZE: usize = HASH_SIZE * 2;
pub const NONCE_SIZE: usize = 8;
/// Stored as `previous_hash` on the first record of a chain.
pub const GENESIS_PREVIOUS_HASH: &str = "0";
