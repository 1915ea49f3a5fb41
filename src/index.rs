//! the buzzer index: every record ever minted, addressed by buzzer

use crate::list::{Membership, Record};
use std::cmp;
use tracing::debug;

// The first allocation holds this many records. After that, capacity doubles.
pub(crate) const INITIAL_CAPACITY: usize = 4;

#[derive(Clone, Debug)]
pub(crate) struct BuzzerIndex {
    // NOTES:
    // - The record for buzzer N is always at position N.
    // - Records are never removed, so the length of this Vec is the number of buzzers minted.
    records: Vec<Record>,
}

impl BuzzerIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> u32 {
        // mint() refuses to grow past u32::MAX.
        self.records.len() as u32
    }

    pub(crate) fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub(crate) fn lookup(&self, index: u32) -> Option<&Record> {
        self.records.get(index as usize)
    }

    // Make room for exactly one more record, doubling when we're full. We do this by hand rather
    // than leaning on Vec::push, because the Vec growth policy is unspecified.
    fn grow_if_full(&mut self) {
        let capacity = self.records.capacity();
        if self.records.len() < capacity {
            return;
        }
        let doubled = capacity.checked_mul(2).expect("capacity overflow");
        let new_capacity = cmp::max(INITIAL_CAPACITY, doubled);
        self.records.reserve_exact(new_capacity - self.records.len());
        debug!(
            old_capacity = capacity,
            new_capacity = self.records.capacity(),
            "grew buzzer index"
        );
    }

    /// Create the record for the next buzzer and return its index.
    ///
    /// The new record isn't linked into any list yet.
    pub(crate) fn mint(&mut self, max_len: u32) -> u32 {
        let index = self.len();
        assert!(index < max_len, "all buzzers issued");
        self.grow_if_full();
        // The membership is overwritten as soon as the caller links the record.
        self.records.push(Record::new(Membership::Queued));
        index
    }
}
