//! Hash-linked transaction records held in an in-memory chain.
//!
//! Each [`Record`] stores the hash of its predecessor. [`chain::Chain`] owns
//! the sequence and guards it with a read-write lock, and [`verify`] scans the
//! stored links to tell whether the chain has been tampered with.
use serde::Serialize;
use sha2::{Digest, Sha256};

pub mod chain;
pub mod constants;
pub mod error;
pub mod verify;

pub use chain::Chain;
pub use error::ChainError;
pub use verify::{verify_chain, ChainStatus};

use constants::{GENESIS_PREVIOUS_HASH, NONCE_SIZE};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    transaction: String,
    nonce: i64,
    previous_hash: String,
    hash: String,
}

impl Record {
    /// Build a record and seal it with its content hash. `previous_hash` is
    /// taken as given; nothing checks it against an actual predecessor.
    pub fn new(
        transaction: impl Into<String>,
        nonce: i64,
        previous_hash: impl Into<String>,
    ) -> Self {
        let transaction = transaction.into();
        let previous_hash = previous_hash.into();
        let hash = compute_hash(&transaction, nonce, &previous_hash);
        Self {
            transaction,
            nonce,
            previous_hash,
            hash,
        }
    }

    /// A first record, pointing at the genesis sentinel.
    pub fn genesis(transaction: impl Into<String>, nonce: i64) -> Self {
        Self::new(transaction, nonce, GENESIS_PREVIOUS_HASH)
    }

    pub fn transaction(&self) -> &str {
        &self.transaction
    }

    pub fn nonce(&self) -> i64 {
        self.nonce
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn hash_bytes(&self) -> Vec<u8> {
        hash_bytes(&self.transaction, self.nonce, &self.previous_hash)
    }

    /// Digest of the current fields. Always equal to [`Record::hash`] for
    /// records built through this crate.
    pub fn compute_hash(&self) -> String {
        compute_hash(&self.transaction, self.nonce, &self.previous_hash)
    }

    /// Replace the payload and reseal this record only. Records that point at
    /// the old hash keep pointing at it.
    pub(crate) fn replace_transaction(&mut self, transaction: String) {
        self.transaction = transaction;
        self.hash = self.compute_hash();
    }
}

/// Digest input: transaction bytes, then the nonce as 8 little-endian bytes,
/// then the previous hash bytes.
pub fn hash_bytes(transaction: &str, nonce: i64, previous_hash: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(transaction.len() + NONCE_SIZE + previous_hash.len());
    bytes.extend_from_slice(transaction.as_bytes());
    bytes.extend_from_slice(&nonce.to_le_bytes());
    bytes.extend_from_slice(previous_hash.as_bytes());
    bytes
}

/// Lowercase hex SHA-256 over [`hash_bytes`].
pub fn compute_hash(transaction: &str, nonce: i64, previous_hash: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(hash_bytes(transaction, nonce, previous_hash));
    hex::encode(hasher.finalize())
}
