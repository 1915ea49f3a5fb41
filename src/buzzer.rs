//! buzzer integer types

use std::fmt;
use std::hash::Hash;
use typenum::Unsigned;

/// An unsigned integer type that buzzers can be issued in.
///
/// The default is `u32`. Smaller widths save space in caller data structures, at the cost of a
/// smaller number of buzzers that can ever be minted. See [`max_len`](Buzzer::max_len).
pub trait Buzzer: Sized + Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {
    type Bits: Unsigned;

    // The index must be less than max_len.
    fn from_index(index: u32) -> Self;

    fn index(self) -> u32;

    /// The maximum number of distinct buzzers a queue with this buzzer type can mint.
    ///
    /// The all-1-bits value is never issued, so that the number of minted buzzers always fits in
    /// the buzzer type itself. For example, a `ServiceQueue<u8>` can mint buzzers 0 through 254.
    /// Trying to mint one more panics.
    fn max_len() -> u32 {
        crate::static_assert_buzzer_bits::<Self::Bits>();
        u32::MAX >> (32 - Self::Bits::U32)
    }
}

impl Buzzer for u8 {
    type Bits = typenum::U8;

    fn from_index(index: u32) -> Self {
        debug_assert!(index < Self::max_len());
        index as u8
    }

    fn index(self) -> u32 {
        self.into()
    }
}

impl Buzzer for u16 {
    type Bits = typenum::U16;

    fn from_index(index: u32) -> Self {
        debug_assert!(index < Self::max_len());
        index as u16
    }

    fn index(self) -> u32 {
        self.into()
    }
}

impl Buzzer for u32 {
    type Bits = typenum::U32;

    fn from_index(index: u32) -> Self {
        debug_assert!(index < Self::max_len());
        index
    }

    fn index(self) -> u32 {
        self
    }
}
