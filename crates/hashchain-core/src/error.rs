use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The target position does not exist. The chain is left untouched.
    #[error("Invalid block index {index} (chain has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ChainError>;
