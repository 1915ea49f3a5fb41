//! A take-a-number service queue with recyclable buzzers.
//!
//! Parties join the line with [`give_buzzer`](ServiceQueue::give_buzzer) and get back a small
//! integer "buzzer". The line is first-come-first-served via [`seat`](ServiceQueue::seat), but a
//! party can also be kicked out from anywhere in line ([`kick_out`](ServiceQueue::kick_out)) or
//! moved to the front ([`take_bribe`](ServiceQueue::take_bribe)). All of these are O(1).
//!
//! Buzzers that leave the line are recycled. A brand new buzzer is only minted when every buzzer
//! minted so far is currently in line, so buzzers stay dense: if `N` buzzers have ever been
//! minted, they're exactly `0..N`.
//!
//! # Example
//!
//! ```
//! use buzzline::{ErrorKind, ServiceQueue};
//!
//! let mut line = ServiceQueue::new();
//! assert_eq!(line.give_buzzer(), 0);
//! assert_eq!(line.give_buzzer(), 1);
//! assert_eq!(line.give_buzzer(), 2);
//! assert_eq!(line.to_string(), "0 1 2");
//!
//! // Buzzer 2 slips the host a twenty.
//! line.take_bribe(2).unwrap();
//! assert_eq!(line.to_string(), "2 0 1");
//! assert_eq!(line.seat(), Ok(2));
//!
//! // Buzzer 2 is free again, so the next party gets it instead of a new buzzer 3.
//! assert_eq!(line.give_buzzer(), 2);
//! assert_eq!(line.len(), 3);
//!
//! // Buzzer 7 was never handed out.
//! assert_eq!(line.kick_out(7).unwrap_err().kind(), ErrorKind::InvalidBuzzer);
//! ```

use std::cmp;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use tracing::trace;
use typenum::Unsigned;

pub mod buzzer;
pub mod buzzer_map;
pub mod error;
mod index;
pub mod iter;
mod list;


pub use buzzer::Buzzer;
pub use error::{Error, ErrorKind};

use index::BuzzerIndex;
use iter::Iter;
use list::{List, Membership};

// These "static" asserts will get compiled out in any case we care about.
fn static_assert_buzzer_bits<Bits: Unsigned>() {
    assert!(Bits::U32 >= 1);
    assert!(Bits::U32 <= 32);
}

// We do u32 -> usize casts all over the place.
fn static_assert_u32_fits_in_usize() {
    assert!(mem::size_of::<usize>() >= mem::size_of::<u32>());
}

/// A take-a-number line. See the [crate docs](crate) for an overview.
///
/// The queue owns one record per buzzer ever minted. Records are never freed individually; they
/// move back and forth between the line and the released pool, and they're all freed together
/// when the `ServiceQueue` is dropped.
#[derive(Clone)]
pub struct ServiceQueue<B: Buzzer = u32> {
    // INVARIANTS:
    // 1. Every record in the index is linked into exactly one of `queue` and `released`, and its
    //    membership says which.
    // 2. The record for buzzer N is at position N in the index, so minted buzzers are 0..len.
    index: BuzzerIndex,
    queue: List,
    released: List,
    _phantom: PhantomData<fn() -> B>,
}

impl ServiceQueue<u32> {
    /// Construct a new, empty `ServiceQueue` with `u32` buzzers.
    ///
    /// The queue will not allocate until the first buzzer is minted.
    pub fn new() -> Self {
        Self::with_buzzer_type()
    }

    /// Construct a new, empty `ServiceQueue` with `u32` buzzers and room for at least `capacity`
    /// buzzers before it needs to reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_buzzer_type_and_capacity(capacity)
    }
}

impl<B: Buzzer> ServiceQueue<B> {
    /// Construct a new, empty `ServiceQueue` with a custom buzzer type.
    ///
    /// The queue will not allocate until the first buzzer is minted.
    pub fn with_buzzer_type() -> Self {
        Self::with_buzzer_type_and_capacity(0)
    }

    /// Construct a new, empty `ServiceQueue` with a custom buzzer type and with room for at least
    /// `capacity` buzzers before it needs to reallocate.
    pub fn with_buzzer_type_and_capacity(capacity: usize) -> Self {
        static_assert_buzzer_bits::<B::Bits>();
        static_assert_u32_fits_in_usize();
        // There's no point reserving room for buzzers that can never be minted.
        let capacity = cmp::min(capacity, B::max_len() as usize);
        Self {
            index: BuzzerIndex::with_capacity(capacity),
            queue: List::new(Membership::Queued),
            released: List::new(Membership::Released),
            _phantom: PhantomData,
        }
    }

    /// The number of parties currently in line.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.len() == 0
    }

    /// The number of distinct buzzers ever minted. Minted buzzers are exactly `0..minted()`.
    pub fn minted(&self) -> usize {
        self.index.len() as usize
    }

    /// The number of buzzers waiting to be reissued.
    pub fn released_len(&self) -> usize {
        self.released.len()
    }

    /// The number of buzzers the queue can mint before it needs to reallocate. This never goes
    /// down.
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    // Look up a buzzer and make sure it's in line right now. Buzzers that were never minted
    // (including values past the end of the index) are treated the same as released ones.
    fn queued_index(&self, buzzer: B) -> Result<u32, Error> {
        let index = buzzer.index();
        match self.index.lookup(index) {
            Some(record) if record.membership == Membership::Queued => Ok(index),
            _ => Err(Error::invalid_buzzer(index)),
        }
    }

    /// Is this buzzer in line right now?
    pub fn contains(&self, buzzer: B) -> bool {
        self.queued_index(buzzer).is_ok()
    }

    /// The buzzer that [`seat`](ServiceQueue::seat) would return next, if anyone is in line.
    pub fn front(&self) -> Option<B> {
        self.queue.front().map(B::from_index)
    }

    /// Add a new party to the back of the line and return their buzzer.
    ///
    /// If any buzzers have been released (by [`seat`](ServiceQueue::seat),
    /// [`kick_out`](ServiceQueue::kick_out), or [`clear`](ServiceQueue::clear)), one of those is
    /// reissued. Which one is unspecified. Otherwise a new buzzer is minted, equal to
    /// [`minted`](ServiceQueue::minted) before the call. This is O(1), amortized over the
    /// occasional reallocation when minting.
    ///
    /// # Panics
    ///
    /// Panics if a buzzer needs to be minted and [`B::max_len`](Buzzer::max_len) buzzers have
    /// already been minted. That is, if that many parties are in line at once.
    pub fn give_buzzer(&mut self) -> B {
        // Reuse a released buzzer if there are any.
        let index = match self.released.pop_back(self.index.records_mut()) {
            Some(index) => {
                trace!(buzzer = index, "reissued buzzer");
                index
            }
            None => {
                let index = self.index.mint(B::max_len());
                trace!(buzzer = index, "minted buzzer");
                index
            }
        };
        self.queue.push_back(self.index.records_mut(), index);
        B::from_index(index)
    }

    /// Remove the party at the front of the line and return their buzzer, which can now be
    /// reissued.
    ///
    /// Returns [`ErrorKind::EmptyQueue`] if no one is in line.
    pub fn seat(&mut self) -> Result<B, Error> {
        let records = self.index.records_mut();
        let index = self.queue.pop_front(records).ok_or_else(Error::empty_queue)?;
        self.released.push_back(records, index);
        trace!(buzzer = index, "seated");
        Ok(B::from_index(index))
    }

    /// Remove a party from anywhere in line. Their buzzer can now be reissued.
    ///
    /// Returns [`ErrorKind::InvalidBuzzer`] and leaves the line alone if the buzzer isn't in line.
    pub fn kick_out(&mut self, buzzer: B) -> Result<(), Error> {
        let index = self.queued_index(buzzer)?;
        let records = self.index.records_mut();
        self.queue.unlink(records, index);
        self.released.push_back(records, index);
        trace!(buzzer = index, "kicked out");
        Ok(())
    }

    /// Move a party to the front of the line. Everyone else keeps their relative order. A party
    /// that's already at the front stays there.
    ///
    /// Returns [`ErrorKind::InvalidBuzzer`] and leaves the line alone if the buzzer isn't in line.
    pub fn take_bribe(&mut self, buzzer: B) -> Result<(), Error> {
        let index = self.queued_index(buzzer)?;
        if self.queue.front() == Some(index) {
            return Ok(());
        }
        let records = self.index.records_mut();
        self.queue.unlink(records, index);
        self.queue.push_front(records, index);
        trace!(buzzer = index, "took bribe");
        Ok(())
    }

    /// Release everyone in line, front to back. Nothing is deallocated, and every buzzer can be
    /// reissued.
    pub fn clear(&mut self) {
        let records = self.index.records_mut();
        let mut cleared = 0;
        while let Some(index) = self.queue.pop_front(records) {
            self.released.push_back(records, index);
            cleared += 1;
        }
        trace!(cleared, "cleared line");
    }

    /// Iterate over the buzzers in line, front to back.
    pub fn iter(&self) -> Iter<'_, B> {
        Iter {
            records: self.index.records(),
            cursor: self.queue.front(),
            remaining: self.queue.len(),
            _phantom: PhantomData,
        }
    }

    /// Iterate over the buzzers waiting to be reissued, in no particular order.
    pub fn released(&self) -> Iter<'_, B> {
        Iter {
            records: self.index.records(),
            cursor: self.released.front(),
            remaining: self.released.len(),
            _phantom: PhantomData,
        }
    }
}

impl Default for ServiceQueue<u32> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the buzzers in line, front to back, separated by spaces.
impl<B: Buzzer> fmt::Display for ServiceQueue<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, buzzer) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", buzzer)?;
        }
        Ok(())
    }
}

impl<B: Buzzer> fmt::Debug for ServiceQueue<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Buzzers<'queue, B: Buzzer>(Iter<'queue, B>);

        impl<'queue, B: Buzzer> fmt::Debug for Buzzers<'queue, B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.clone()).finish()
            }
        }

        f.debug_struct("ServiceQueue")
            .field("queue", &Buzzers(self.iter()))
            .field("released", &Buzzers(self.released()))
            .finish()
    }
}
