use crate::render::{render, Format};
use anyhow::Result;
use hashchain_core::{constants::GENESIS_PREVIOUS_HASH, Chain, Record};
use std::io::Write;
use tracing::info;

const TRANSACTIONS: [(&str, i64); 3] = [
    ("Ahmed to Fatima: 50 PKR", 1),
    ("Fatima to Zain: 20 PKR", 2),
    ("Zain to Sara: 30 PKR", 3),
];
const TAMPER_INDEX: usize = 1;
const TAMPER_TRANSACTION: &str = "Fatima to Ali: 25 PKR";

/// Build three linked records, tamper with the middle one, then verify.
pub fn run(chain: &Chain, format: Format, out: &mut impl Write) -> Result<()> {
    info!("running demonstration");
    for (transaction, nonce) in TRANSACTIONS {
        let previous_hash = chain
            .tip_hash()
            .unwrap_or_else(|| GENESIS_PREVIOUS_HASH.to_string());
        chain.append(Record::new(transaction, nonce, previous_hash));
        write!(out, "{}", render(&chain.snapshot(), format)?)?;
    }

    match chain.mutate_transaction(TAMPER_INDEX, TAMPER_TRANSACTION) {
        Ok(_) => {
            writeln!(out, "Block changed:")?;
            write!(out, "{}", render(&chain.snapshot(), format)?)?;
        }
        Err(e) => writeln!(out, "{e}")?,
    }

    writeln!(out, "{}", chain.verify())?;
    Ok(())
}
