//! Replay a JSON list of chain operations against a fresh chain.
//!
//! ```json
//! [
//!   { "op": "append", "transaction": "Ahmed to Fatima: 50", "nonce": 1 },
//!   { "op": "append", "transaction": "Fatima to Zain: 20", "nonce": 2 },
//!   { "op": "mutate", "index": 0, "transaction": "Ahmed to Fatima: 500" },
//!   { "op": "show" },
//!   { "op": "verify" }
//! ]
//! ```
//!
//! An `append` without `previous_hash` links to the current tip.
use crate::render::{render, Format};
use anyhow::{Context, Result};
use hashchain_core::{Chain, Record};
use serde::Deserialize;
use std::{io::Write, path::Path};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Op {
    Append {
        transaction: String,
        nonce: i64,
        #[serde(default)]
        previous_hash: Option<String>,
    },
    Mutate {
        index: usize,
        transaction: String,
    },
    Verify,
    Show,
}

pub fn load(path: &Path) -> Result<Vec<Op>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse(&raw).with_context(|| format!("parsing script {}", path.display()))
}

pub fn parse(raw: &str) -> Result<Vec<Op>> {
    Ok(serde_json::from_str(raw)?)
}

/// Run every op in order. A bad mutate index is reported and skipped.
pub fn run(chain: &Chain, ops: Vec<Op>, format: Format, out: &mut impl Write) -> Result<()> {
    for (step, op) in ops.into_iter().enumerate() {
        debug!(step, ?op, "replaying");
        match op {
            Op::Append {
                transaction,
                nonce,
                previous_hash: Some(previous_hash),
            } => {
                chain.append(Record::new(transaction, nonce, previous_hash));
            }
            Op::Append {
                transaction,
                nonce,
                previous_hash: None,
            } => {
                chain.append_linked(transaction, nonce);
            }
            Op::Mutate { index, transaction } => {
                match chain.mutate_transaction(index, transaction) {
                    Ok(_) => writeln!(out, "Block changed:")?,
                    Err(e) => {
                        warn!(step, error = %e, "mutation rejected");
                        writeln!(out, "{e}")?;
                    }
                }
            }
            Op::Verify => writeln!(out, "{}", chain.verify())?,
            Op::Show => write!(out, "{}", render(&chain.snapshot(), format)?)?,
        }
    }
    Ok(())
}
