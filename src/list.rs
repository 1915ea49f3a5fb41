//! intrusive doubly linked lists over the record arena
//!
//! Records live in the buzzer index and never move. A `List` only stores the handles (record
//! indexes) of its two ends, and each record stores the handles of its neighbors. That gives O(1)
//! removal of any record we can look up by buzzer, without a scan and without raw pointers.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Membership {
    Queued,
    Released,
}

#[derive(Clone, Debug)]
pub(crate) struct Record {
    pub(crate) membership: Membership,
    pub(crate) prev: Option<u32>,
    pub(crate) next: Option<u32>,
}

impl Record {
    pub(crate) fn new(membership: Membership) -> Self {
        Self {
            membership,
            prev: None,
            next: None,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct List {
    // Every record linked into this list is stamped with this membership.
    owner: Membership,
    front: Option<u32>,
    back: Option<u32>,
    len: usize,
}

impl List {
    pub(crate) const fn new(owner: Membership) -> Self {
        Self {
            owner,
            front: None,
            back: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn front(&self) -> Option<u32> {
        self.front
    }

    fn debug_assert_ends_consistent(&self) {
        debug_assert_eq!(self.front.is_none(), self.len == 0, "front/len mismatch");
        debug_assert_eq!(self.back.is_none(), self.len == 0, "back/len mismatch");
    }

    // The record must not currently be linked into any list.
    pub(crate) fn push_back(&mut self, records: &mut [Record], index: u32) {
        let old_back = self.back;
        let record = &mut records[index as usize];
        record.membership = self.owner;
        record.prev = old_back;
        record.next = None;
        match old_back {
            Some(back) => records[back as usize].next = Some(index),
            None => self.front = Some(index),
        }
        self.back = Some(index);
        self.len += 1;
        self.debug_assert_ends_consistent();
    }

    // The record must not currently be linked into any list.
    pub(crate) fn push_front(&mut self, records: &mut [Record], index: u32) {
        let old_front = self.front;
        let record = &mut records[index as usize];
        record.membership = self.owner;
        record.prev = None;
        record.next = old_front;
        match old_front {
            Some(front) => records[front as usize].prev = Some(index),
            None => self.back = Some(index),
        }
        self.front = Some(index);
        self.len += 1;
        self.debug_assert_ends_consistent();
    }

    /// Detach a record from wherever it sits in this list, using only its own links.
    ///
    /// The record must currently be linked into this list. Its membership is left alone, so the
    /// caller is expected to push it somewhere right away.
    pub(crate) fn unlink(&mut self, records: &mut [Record], index: u32) {
        let record = &mut records[index as usize];
        debug_assert_eq!(record.membership, self.owner, "record belongs to another list");
        let prev = record.prev.take();
        let next = record.next.take();
        // A missing neighbor means this record was an end of the list, and the list's anchor
        // moves past it instead. The sole-element case hits both None arms.
        match prev {
            Some(prev) => records[prev as usize].next = next,
            None => self.front = next,
        }
        match next {
            Some(next) => records[next as usize].prev = prev,
            None => self.back = prev,
        }
        self.len -= 1;
        self.debug_assert_ends_consistent();
    }

    pub(crate) fn pop_front(&mut self, records: &mut [Record]) -> Option<u32> {
        let front = self.front?;
        self.unlink(records, front);
        Some(front)
    }

    pub(crate) fn pop_back(&mut self, records: &mut [Record]) -> Option<u32> {
        let back = self.back?;
        self.unlink(records, back);
        Some(back)
    }
}
