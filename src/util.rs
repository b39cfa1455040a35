//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [ColumnSet] used for storing
//! the candidate columns of a person and the columns already used by a branch
//! of the search.

use std::iter::FromIterator;
use std::ops::Sub;
use std::slice::Iter;

/// A set of column indices that is implemented as a bit vector. Each column is
/// represented by one bit in a vector of words, which grows as larger columns
/// are inserted. This generally has better performance than a `HashSet` and
/// is cheap to copy, which the search relies on when it hands a new set of
/// used columns to every recursive branch.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ColumnSet {
    content: Vec<u64>
}

struct BitIterator {
    bit_index: usize,
    value: u64
}

impl BitIterator {
    fn new(value: u64) -> BitIterator {
        BitIterator {
            bit_index: 0,
            value
        }
    }
}

impl Iterator for BitIterator {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.value == 0 {
            return None;
        }

        let diff = self.value.trailing_zeros() as usize;
        let result = self.bit_index + diff;

        // shifting by 64 would overflow, so the lowest set bit is cleared
        // instead of shifted away
        self.value &= self.value - 1;
        self.value >>= diff;
        self.bit_index += diff;
        Some(result)
    }
}

/// An iterator over the content of a [ColumnSet] in ascending order.
pub struct ColumnSetIter<'a> {
    offset: usize,
    current: BitIterator,
    content: Iter<'a, u64>
}

impl<'a> ColumnSetIter<'a> {
    fn new(set: &'a ColumnSet) -> ColumnSetIter<'a> {
        let mut content = set.content.iter();
        let current = BitIterator::new(content.next().copied().unwrap_or(0));

        ColumnSetIter {
            offset: 0,
            current,
            content
        }
    }
}

impl<'a> Iterator for ColumnSetIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(bit_index) = self.current.next() {
                return Some(self.offset + bit_index);
            }

            let &word = self.content.next()?;
            self.offset += 64;
            self.current = BitIterator::new(word);
        }
    }
}

fn locate(column: usize) -> (usize, u64) {
    (column >> 6, 1u64 << (column & 63))
}

impl ColumnSet {

    /// Creates a new, empty `ColumnSet`.
    pub fn new() -> ColumnSet {
        ColumnSet {
            content: Vec::new()
        }
    }

    /// Creates a new `ColumnSet` that contains every column in `0..columns`.
    pub fn range(columns: usize) -> ColumnSet {
        let mut content = vec![!0u64; columns >> 6];
        let remaining_ones = columns & 63;

        if remaining_ones > 0 {
            content.push((1u64 << remaining_ones) - 1);
        }

        ColumnSet {
            content
        }
    }

    fn trim(&mut self) {
        while let Some(&0) = self.content.last() {
            self.content.pop();
        }
    }

    /// Indicates whether this set contains the given column.
    pub fn contains(&self, column: usize) -> bool {
        let (word_index, mask) = locate(column);
        self.content.get(word_index)
            .map(|word| word & mask != 0)
            .unwrap_or(false)
    }

    /// Inserts the given column into this set. Returns `true` if the set has
    /// changed, i.e. the column was not present before.
    pub fn insert(&mut self, column: usize) -> bool {
        let (word_index, mask) = locate(column);

        if word_index >= self.content.len() {
            self.content.resize(word_index + 1, 0);
        }

        let word = &mut self.content[word_index];
        let changed = *word & mask == 0;
        *word |= mask;
        changed
    }

    /// Removes the given column from this set. Returns `true` if the set has
    /// changed, i.e. the column was present before.
    pub fn remove(&mut self, column: usize) -> bool {
        let (word_index, mask) = locate(column);

        match self.content.get_mut(word_index) {
            Some(word) if *word & mask != 0 => {
                *word &= !mask;
                self.trim();
                true
            },
            _ => false
        }
    }

    /// Returns a copy of this set which additionally contains `column`. The
    /// set itself is left unchanged.
    pub fn with(&self, column: usize) -> ColumnSet {
        let mut result = self.clone();
        result.insert(column);
        result
    }

    /// Returns an iterator over the columns contained in this set in
    /// ascending order.
    pub fn iter(&self) -> ColumnSetIter<'_> {
        ColumnSetIter::new(self)
    }

    /// Indicates whether this set contains no columns.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of columns contained in this set.
    pub fn len(&self) -> usize {
        self.content.iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Computes the set of all columns contained in this set, but not in
    /// `other`.
    pub fn difference(&self, other: &ColumnSet) -> ColumnSet {
        let content = self.content.iter()
            .enumerate()
            .map(|(i, word)| word & !other.content.get(i).copied().unwrap_or(0))
            .collect();
        let mut result = ColumnSet { content };
        result.trim();
        result
    }

    /// Computes the set of all columns contained in this set or in `other`.
    pub fn union(&self, other: &ColumnSet) -> ColumnSet {
        let len = self.content.len().max(other.content.len());
        let content = (0..len)
            .map(|i| self.content.get(i).copied().unwrap_or(0) |
                other.content.get(i).copied().unwrap_or(0))
            .collect();
        ColumnSet { content }
    }
}

impl FromIterator<usize> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> ColumnSet {
        let mut set = ColumnSet::new();

        for column in iter {
            set.insert(column);
        }

        set
    }
}

impl Sub for &ColumnSet {
    type Output = ColumnSet;

    fn sub(self, rhs: &ColumnSet) -> ColumnSet {
        self.difference(rhs)
    }
}

/// Creates a new [ColumnSet] containing the given columns.
///
/// ```
/// use murdoku::columns;
///
/// let set = columns!(1, 4);
/// assert!(set.contains(4));
/// assert!(!set.contains(2));
/// assert_eq!(2, set.len());
/// ```
#[macro_export]
macro_rules! columns {
    () => {
        $crate::util::ColumnSet::new()
    };

    ($($column:expr),+ $(,)?) => {
        {
            let mut set = $crate::util::ColumnSet::new();
            $(set.insert($column);)+
            set
        }
    };
}
