//! iterator types

use crate::{buzzer::Buzzer, list::Record, ServiceQueue};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator over buzzers, following one list from front to back. Returned by
/// [`iter`](crate::ServiceQueue::iter) and [`released`](crate::ServiceQueue::released), or
/// automatically constructed by iterating over `&ServiceQueue`.
#[derive(Clone, Debug)]
pub struct Iter<'queue, B: Buzzer = u32> {
    pub(crate) records: &'queue [Record],
    pub(crate) cursor: Option<u32>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<fn() -> B>,
}

impl<'queue, B: Buzzer> Iterator for Iter<'queue, B> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let index = self.cursor?;
        self.cursor = self.records[index as usize].next;
        self.remaining -= 1;
        Some(B::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'queue, B: Buzzer> ExactSizeIterator for Iter<'queue, B> {}

impl<'queue, B: Buzzer> FusedIterator for Iter<'queue, B> {}

impl<'queue, B: Buzzer> IntoIterator for &'queue ServiceQueue<B> {
    type Item = B;
    type IntoIter = Iter<'queue, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
