//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for
//! duplicate scans by constraints and for the candidate sets computed by the
//! propagation solver.

use crate::GRID_SIZE;

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit in a `u16`. This generally has better
/// performance than a `HashSet` and is cheap to create and discard, which the
/// propagation solver does once per empty cell per pass.
///
/// ```
/// use sudoku_crosscheck::util::DigitSet;
///
/// let mut set = DigitSet::empty();
/// set.insert(4);
/// set.insert(7);
/// assert!(set.contains(4));
/// assert!(!set.contains(5));
/// assert_eq!(2, set.len());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    bits: u16
}

impl DigitSet {

    /// Creates a new, empty digit set.
    pub const fn empty() -> DigitSet {
        DigitSet { bits: 0 }
    }

    /// Creates a digit set containing all digits from 1 to 9.
    pub const fn full() -> DigitSet {
        DigitSet { bits: ((1u16 << GRID_SIZE) - 1) << 1 }
    }

    /// Inserts the given digit into this set. Returns `true` if the set
    /// changed, i.e. the digit was not contained before, and `false`
    /// otherwise.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn insert(&mut self, digit: usize) -> bool {
        assert!(digit >= 1 && digit <= GRID_SIZE,
            "digit out of range: {}", digit);
        let mask = 1u16 << digit;
        let newly_inserted = self.bits & mask == 0;
        self.bits |= mask;
        newly_inserted
    }

    /// Removes the given digit from this set. Returns `true` if the set
    /// changed, i.e. the digit was contained before, and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn remove(&mut self, digit: usize) -> bool {
        assert!(digit >= 1 && digit <= GRID_SIZE,
            "digit out of range: {}", digit);
        let mask = 1u16 << digit;
        let removed = self.bits & mask != 0;
        self.bits &= !mask;
        removed
    }

    /// Indicates whether the given digit is contained in this set. Digits
    /// outside the range `[1, 9]` are never contained.
    pub fn contains(&self, digit: usize) -> bool {
        digit >= 1 && digit <= GRID_SIZE && self.bits & (1 << digit) != 0
    }

    /// Gets the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Indicates whether this set contains no digits.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Removes all digits from this set.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// If this set contains exactly one digit, returns that digit, otherwise
    /// returns `None`. This is the query the propagation solver uses to
    /// detect naked singles.
    pub fn sole_digit(&self) -> Option<usize> {
        if self.len() == 1 {
            Some(self.bits.trailing_zeros() as usize)
        }
        else {
            None
        }
    }

    /// Returns an iterator over the digits in this set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let bits = self.bits;
        (1..=GRID_SIZE).filter(move |digit| bits & (1 << digit) != 0)
    }
}
