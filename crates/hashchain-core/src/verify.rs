use crate::Record;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainStatus {
    Valid,
    Invalid,
}

impl ChainStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, ChainStatus::Valid)
    }
}

impl fmt::Display for ChainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainStatus::Valid => f.write_str("Blockchain is valid."),
            ChainStatus::Invalid => f.write_str("Blockchain is not valid!"),
        }
    }
}

/// Check every stored link against the predecessor's hash as it is now.
///
/// Stops at the first mismatch and does not say where it was. Chains with
/// fewer than two records are trivially valid.
pub fn verify_chain(records: &[Record]) -> ChainStatus {
    let intact = records
        .windows(2)
        .all(|pair| pair[1].previous_hash() == pair[0].hash());
    if intact {
        ChainStatus::Valid
    } else {
        ChainStatus::Invalid
    }
}
