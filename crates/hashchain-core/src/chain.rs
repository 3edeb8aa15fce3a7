use crate::{
    constants::GENESIS_PREVIOUS_HASH,
    error::{ChainError, Result},
    verify::{verify_chain, ChainStatus},
    Record,
};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

/// The shared, ordered sequence of records.
///
/// Writers (`append`, `append_linked`, `mutate_transaction`) hold the write
/// lock for their whole read-modify-write. Readers take the read lock, so a
/// verification pass never sees a half-applied write. Share it across
/// threads with `Arc<Chain>`.
#[derive(Debug, Default)]
pub struct Chain {
    records: RwLock<Vec<Record>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a caller-built record and return its position.
    pub fn append(&self, record: Record) -> usize {
        let mut records = self.records.write();
        records.push(record);
        let index = records.len() - 1;
        info!(index, hash = %records[index].hash(), "record appended");
        index
    }

    /// Build a record linked to the current tip (or the genesis sentinel) and
    /// append it, without releasing the lock in between.
    pub fn append_linked(&self, transaction: impl Into<String>, nonce: i64) -> Record {
        let mut records = self.records.write();
        let previous_hash = records
            .last()
            .map(|r| r.hash().to_string())
            .unwrap_or_else(|| GENESIS_PREVIOUS_HASH.to_string());
        let record = Record::new(transaction, nonce, previous_hash);
        records.push(record.clone());
        info!(index = records.len() - 1, hash = %record.hash(), "linked record appended");
        record
    }

    /// Replace the transaction at `index` and reseal that record.
    ///
    /// Only the target record is rehashed. Its successor keeps the old hash
    /// as `previous_hash`, which is what lets [`Chain::verify`] notice the
    /// change. Nothing here heals the chain.
    pub fn mutate_transaction(
        &self,
        index: usize,
        transaction: impl Into<String>,
    ) -> Result<Record> {
        let mut records = self.records.write();
        let len = records.len();
        let record = records
            .get_mut(index)
            .ok_or(ChainError::IndexOutOfRange { index, len })?;
        let old_hash = record.hash().to_string();
        record.replace_transaction(transaction.into());
        info!(index, %old_hash, new_hash = %record.hash(), "record transaction changed");
        Ok(record.clone())
    }

    pub fn snapshot(&self) -> Vec<Record> {
        let records = self.records.read();
        debug!(len = records.len(), "chain snapshot taken");
        records.clone()
    }

    pub fn get(&self, index: usize) -> Option<Record> {
        self.records.read().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Hash of the last record, if any.
    pub fn tip_hash(&self) -> Option<String> {
        self.records.read().last().map(|r| r.hash().to_string())
    }

    /// Run [`verify_chain`] while holding the read lock.
    pub fn verify(&self) -> ChainStatus {
        let records = self.records.read();
        let status = verify_chain(&records);
        match status {
            ChainStatus::Valid => debug!(len = records.len(), "chain verified"),
            ChainStatus::Invalid => warn!(len = records.len(), "chain linkage broken"),
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chain() -> Chain {
        let chain = Chain::new();
        chain.append_linked("Ahmed to Fatima: 50", 1);
        chain.append_linked("Fatima to Zain: 20", 2);
        chain.append_linked("Zain to Sara: 30", 3);
        chain
    }

    #[test]
    fn new_chain_is_empty() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.tip_hash(), None);
        assert!(chain.snapshot().is_empty());
        assert_eq!(chain.verify(), ChainStatus::Valid);
    }

    #[test]
    fn append_returns_position() {
        let chain = Chain::new();
        let first = Record::genesis("a", 1);
        assert_eq!(chain.append(first.clone()), 0);
        assert_eq!(chain.append(Record::new("b", 2, first.hash())), 1);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn append_keeps_record_as_given() {
        let chain = Chain::new();
        let before = chain.snapshot().len();
        let record = Record::new("unlinked", 9, "whatever");
        chain.append(record.clone());
        let snapshot = chain.snapshot();
        assert_eq!(snapshot.len(), before + 1);
        assert_eq!(snapshot.last(), Some(&record));
        assert_eq!(snapshot[0].hash(), record.compute_hash());
    }

    #[test]
    fn append_linked_uses_tip() {
        let chain = Chain::new();
        let genesis = chain.append_linked("a", 1);
        assert_eq!(genesis.previous_hash(), GENESIS_PREVIOUS_HASH);
        let next = chain.append_linked("b", 2);
        assert_eq!(next.previous_hash(), genesis.hash());
        assert_eq!(chain.tip_hash().as_deref(), Some(next.hash()));
    }

    #[test]
    fn mutate_breaks_linkage() {
        let chain = sample_chain();
        assert_eq!(chain.verify(), ChainStatus::Valid);
        let old = chain.get(1).unwrap();
        let changed = chain.mutate_transaction(1, "Fatima to Ali: 25").unwrap();
        assert_eq!(changed.transaction(), "Fatima to Ali: 25");
        assert_eq!(changed.previous_hash(), old.previous_hash());
        assert_ne!(changed.hash(), old.hash());
        // successor still points at the old hash
        assert_eq!(chain.get(2).unwrap().previous_hash(), old.hash());
        assert_eq!(chain.verify(), ChainStatus::Invalid);
    }

    #[test]
    fn mutate_tip_keeps_chain_valid() {
        let chain = sample_chain();
        chain.mutate_transaction(2, "Zain to Sara: 3000").unwrap();
        assert_eq!(chain.verify(), ChainStatus::Valid);
    }

    #[test]
    fn mutate_out_of_range_leaves_chain_untouched() {
        let chain = sample_chain();
        let before = chain.snapshot();
        for index in [3, usize::MAX] {
            let err = chain.mutate_transaction(index, "x").unwrap_err();
            assert_eq!(err, ChainError::IndexOutOfRange { index, len: 3 });
            assert!(err.to_string().starts_with("Invalid block index"));
        }
        assert_eq!(chain.snapshot(), before);
    }

    #[test]
    fn mutate_on_empty_chain_fails() {
        let chain = Chain::new();
        assert_eq!(
            chain.mutate_transaction(0, "x"),
            Err(ChainError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn get_out_of_range_is_none() {
        let chain = sample_chain();
        assert!(chain.get(3).is_none());
        assert_eq!(chain.get(0).unwrap().transaction(), "Ahmed to Fatima: 50");
    }
}
