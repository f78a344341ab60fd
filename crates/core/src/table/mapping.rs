//! Exact-match code point substitution tables.
//!
//! Case folding outputs are not uniform across ranges, so these tables are
//! keyed on single code points and searched by key.

use crate::error::{PrepError, Result};

/// One substitution: `codepoint` becomes `replacement`.
///
/// An empty replacement deletes the code point; more than one element is an
/// expansion (U+00DF folds to "ss").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingEntry {
    pub codepoint: u32,
    pub replacement: &'static [u32],
}

impl MappingEntry {
    pub const fn new(codepoint: u32, replacement: &'static [u32]) -> Self {
        Self {
            codepoint,
            replacement,
        }
    }
}

/// Entries sorted by code point, unique keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingTable {
    entries: &'static [MappingEntry],
}

impl MappingTable {
    /// Wrap static entries without checking order. See [`validate`](Self::validate).
    pub const fn from_static(entries: &'static [MappingEntry]) -> Self {
        Self { entries }
    }

    /// Wrap static entries, rejecting unsorted or duplicate keys.
    pub fn new(entries: &'static [MappingEntry]) -> Result<Self> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, pair) in self.entries.windows(2).enumerate() {
            if pair[0].codepoint >= pair[1].codepoint {
                return Err(PrepError::InvalidMappingTable(format!(
                    "entry {} ({:#x}) is not above entry {} ({:#x})",
                    i + 1,
                    pair[1].codepoint,
                    i,
                    pair[0].codepoint
                )));
            }
        }
        Ok(())
    }

    /// Look up the replacement for `cp`. `None` means pass through unchanged.
    #[inline]
    pub fn map(&self, cp: u32) -> Option<&'static [u32]> {
        self.entries
            .binary_search_by_key(&cp, |e| e.codepoint)
            .ok()
            .map(|i| self.entries[i].replacement)
    }

    pub fn entries(&self) -> &'static [MappingEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: [MappingEntry; 3] = [
        MappingEntry::new(0x41, &[0x61]),
        MappingEntry::new(0xAD, &[]),
        MappingEntry::new(0xDF, &[0x73, 0x73]),
    ];

    #[test]
    fn map_distinguishes_pass_delete_and_replace() {
        let t = MappingTable::new(&SAMPLE).unwrap();
        assert_eq!(t.map(0x42), None);
        assert_eq!(t.map(0xAD), Some(&[][..]));
        assert_eq!(t.map(0x41), Some(&[0x61][..]));
        assert_eq!(t.map(0xDF), Some(&[0x73, 0x73][..]));
    }

    #[test]
    fn new_rejects_duplicate_keys() {
        static DUP: [MappingEntry; 2] = [
            MappingEntry::new(0x41, &[0x61]),
            MappingEntry::new(0x41, &[0x62]),
        ];
        assert!(matches!(
            MappingTable::new(&DUP),
            Err(PrepError::InvalidMappingTable(_))
        ));
    }

    #[test]
    fn empty_table_passes_everything_through() {
        let t = MappingTable::from_static(&[]);
        assert!(t.is_empty());
        assert_eq!(t.map(0), None);
    }
}
