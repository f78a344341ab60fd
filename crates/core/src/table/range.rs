//! Sorted, disjoint code point range sets.
//!
//! A `RangeTable` answers "is this code point in the set" with a binary
//! search over range starts. Tables baked into the binary are built with
//! [`RangeTable::from_static`]; tables assembled at runtime go through
//! [`RangeTable::new`] or [`RangeTable::union`], which enforce the ordering
//! invariant.

use std::borrow::Cow;

use crate::error::{PrepError, Result};

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// A closed interval `[start, end]` of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodepointRange {
    pub start: u32,
    pub end: u32,
}

impl CodepointRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// A range holding exactly one code point.
    pub const fn single(cp: u32) -> Self {
        Self { start: cp, end: cp }
    }

    #[inline]
    pub const fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }
}

/// An ascending sequence of non-overlapping [`CodepointRange`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable {
    ranges: Cow<'static, [CodepointRange]>,
}

impl RangeTable {
    /// Wrap static range data without checking it.
    ///
    /// The caller guarantees that `ranges` is sorted by start and that no two
    /// ranges overlap. Lookups on data that breaks this are meaningless.
    pub const fn from_static(ranges: &'static [CodepointRange]) -> Self {
        Self {
            ranges: Cow::Borrowed(ranges),
        }
    }

    /// A table with no members.
    pub const fn empty() -> Self {
        Self::from_static(&[])
    }

    /// Build a table from owned ranges, rejecting unsorted, overlapping,
    /// inverted or out-of-range data.
    pub fn new(ranges: Vec<CodepointRange>) -> Result<Self> {
        let table = Self {
            ranges: Cow::Owned(ranges),
        };
        table.validate()?;
        Ok(table)
    }

    /// Merge several tables into one, coalescing overlapping and adjacent
    /// ranges.
    pub fn union(tables: &[&RangeTable]) -> Self {
        let mut all: Vec<CodepointRange> = tables
            .iter()
            .flat_map(|t| t.ranges.iter().copied())
            .collect();
        all.sort_unstable_by_key(|r| r.start);

        let mut merged: Vec<CodepointRange> = Vec::with_capacity(all.len());
        for range in all {
            match merged.last_mut() {
                Some(last) if range.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
        }

        Self {
            ranges: Cow::Owned(merged),
        }
    }

    /// Check the ordering invariant.
    pub fn validate(&self) -> Result<()> {
        let mut prev: Option<&CodepointRange> = None;
        for (i, range) in self.ranges.iter().enumerate() {
            if range.start > range.end {
                return Err(PrepError::InvalidRangeTable(format!(
                    "range {i} is inverted: {:#x} > {:#x}",
                    range.start, range.end
                )));
            }
            if range.end > MAX_CODEPOINT {
                return Err(PrepError::InvalidRangeTable(format!(
                    "range {i} ends past U+10FFFF: {:#x}",
                    range.end
                )));
            }
            if let Some(p) = prev {
                if range.start <= p.end {
                    return Err(PrepError::InvalidRangeTable(format!(
                        "range {i} starting at {:#x} is unsorted or overlaps the previous range ending at {:#x}",
                        range.start, p.end
                    )));
                }
            }
            prev = Some(range);
        }
        Ok(())
    }

    /// Binary search on range starts.
    ///
    /// Returns `Ok(i)` when `cp` is exactly the start of range `i`, otherwise
    /// `Err(i)` where `i` is the index a range starting at `cp` would be
    /// inserted at.
    #[inline]
    pub fn search(&self, cp: u32) -> std::result::Result<usize, usize> {
        self.ranges.binary_search_by_key(&cp, |r| r.start)
    }

    /// [`search`](Self::search) folded into one signed value: the matching
    /// index, or `-(insertion_point + 1)` on a miss.
    pub fn search_encoded(&self, cp: u32) -> isize {
        match self.search(cp) {
            Ok(i) => i as isize,
            Err(i) => -(i as isize) - 1,
        }
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        match self.search(cp) {
            Ok(_) => true,
            Err(0) => false,
            Err(i) => cp <= self.ranges[i - 1].end,
        }
    }

    #[inline]
    pub fn contains_char(&self, c: char) -> bool {
        self.contains(c as u32)
    }

    pub fn ranges(&self) -> &[CodepointRange] {
        &self.ranges
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodepointRange> {
        self.ranges.iter()
    }

    /// Number of ranges (not code points).
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of code points covered.
    pub fn codepoint_count(&self) -> u32 {
        self.ranges.iter().map(|r| r.end - r.start + 1).sum()
    }
}

impl Default for RangeTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(u32, u32)]) -> RangeTable {
        RangeTable::new(
            pairs
                .iter()
                .map(|&(s, e)| CodepointRange::new(s, e))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn contains_checks_inclusive_bounds() {
        let t = table(&[(10, 20), (30, 40)]);
        assert!(!t.contains(9));
        assert!(t.contains(10));
        assert!(t.contains(15));
        assert!(t.contains(20));
        assert!(!t.contains(21));
        assert!(!t.contains(25));
        assert!(t.contains(30));
        assert!(t.contains(40));
        assert!(!t.contains(41));
        assert!(!t.contains(MAX_CODEPOINT));
    }

    #[test]
    fn empty_table_contains_nothing() {
        let t = RangeTable::empty();
        assert!(t.is_empty());
        assert!(!t.contains(0));
        assert!(!t.contains(MAX_CODEPOINT));
        assert_eq!(t.search(0), Err(0));
        assert_eq!(t.search_encoded(0), -1);
    }

    #[test]
    fn search_encodes_insertion_point() {
        let t = table(&[(10, 20), (30, 40)]);
        assert_eq!(t.search_encoded(10), 0);
        assert_eq!(t.search_encoded(30), 1);
        assert_eq!(t.search_encoded(5), -1);
        assert_eq!(t.search_encoded(15), -2);
        assert_eq!(t.search_encoded(35), -3);
    }

    #[test]
    fn new_rejects_overlap() {
        let err = RangeTable::new(vec![
            CodepointRange::new(10, 20),
            CodepointRange::new(15, 25),
        ])
        .unwrap_err();
        assert!(matches!(err, PrepError::InvalidRangeTable(_)));
    }

    #[test]
    fn new_rejects_unsorted_and_inverted() {
        assert!(
            RangeTable::new(vec![
                CodepointRange::new(30, 40),
                CodepointRange::new(10, 20),
            ])
            .is_err()
        );
        assert!(RangeTable::new(vec![CodepointRange::new(5, 4)]).is_err());
        assert!(RangeTable::new(vec![CodepointRange::new(0, 0x110000)]).is_err());
    }

    #[test]
    fn union_coalesces_overlapping_and_adjacent() {
        let a = table(&[(1, 5), (20, 30)]);
        let b = table(&[(4, 9), (10, 12), (40, 40)]);
        let u = RangeTable::union(&[&a, &b]);
        assert_eq!(
            u.ranges(),
            &[
                CodepointRange::new(1, 12),
                CodepointRange::new(20, 30),
                CodepointRange::new(40, 40),
            ]
        );
        assert!(u.validate().is_ok());
        assert_eq!(u.codepoint_count(), 12 + 11 + 1);
    }

    #[test]
    fn union_handles_max_codepoint() {
        let a = table(&[(MAX_CODEPOINT - 1, MAX_CODEPOINT)]);
        let b = table(&[(MAX_CODEPOINT, MAX_CODEPOINT)]);
        let u = RangeTable::union(&[&a, &b]);
        assert_eq!(u.len(), 1);
        assert!(u.contains(MAX_CODEPOINT));
    }
}
