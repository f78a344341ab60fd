//! Unicode capabilities the engine consumes.
//!
//! The pipeline needs three facts it does not compute itself: compatibility
//! composition (NFKC), whether a code point is assigned, and its
//! bidirectional category. Each sits behind a trait so hosts can pin a
//! different Unicode version.

use unicode_bidi::BidiClass;
use unicode_normalization::UnicodeNormalization;

use crate::table::rfc3454;

/// Unicode normalization form KC over a code point sequence.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, input: &[char]) -> Vec<char>;
}

/// Character properties used by the unassigned and bidi checks.
pub trait UnicodeDatabase: Send + Sync {
    fn is_assigned(&self, cp: u32) -> bool;
    fn bidi_category(&self, cp: u32) -> BidiCategory;
}

/// Bidirectional category, collapsed to what RFC 3454 section 6 needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiCategory {
    /// Left-to-right.
    L,
    /// Right-to-left.
    R,
    /// Right-to-left Arabic.
    ///
    /// Never produced by [`Rfc3454Database`], whose D.1 table does not split
    /// R from AL.
    AL,
    Other,
}

impl BidiCategory {
    /// True for the RandALCat group (R or AL).
    #[inline]
    pub fn is_rand_al(self) -> bool {
        matches!(self, Self::R | Self::AL)
    }

    #[inline]
    pub fn is_l(self) -> bool {
        self == Self::L
    }
}

impl From<BidiClass> for BidiCategory {
    fn from(class: BidiClass) -> Self {
        match class {
            BidiClass::L => Self::L,
            BidiClass::R => Self::R,
            BidiClass::AL => Self::AL,
            _ => Self::Other,
        }
    }
}

/// NFKC backed by `unicode-normalization`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nfkc;

impl Normalizer for Nfkc {
    fn normalize(&self, input: &[char]) -> Vec<char> {
        input.iter().copied().nfkc().collect()
    }
}

/// Unicode 3.2 properties from RFC 3454 tables A.1, D.1 and D.2.
///
/// Every profile in this crate references Unicode 3.2, so this is the
/// default database.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3454Database;

impl UnicodeDatabase for Rfc3454Database {
    fn is_assigned(&self, cp: u32) -> bool {
        !rfc3454::A_1.contains(cp)
    }

    fn bidi_category(&self, cp: u32) -> BidiCategory {
        // D.1 only lists R and AL together; report them as R.
        if rfc3454::D_1.contains(cp) {
            BidiCategory::R
        } else if rfc3454::D_2.contains(cp) {
            BidiCategory::L
        } else {
            BidiCategory::Other
        }
    }
}

/// Bidi categories from the current Unicode release (via `unicode-bidi`),
/// with assignment delegated to `D`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBidiDatabase<D = Rfc3454Database> {
    assigned: D,
}

impl<D: UnicodeDatabase> UnicodeBidiDatabase<D> {
    pub fn new(assigned: D) -> Self {
        Self { assigned }
    }
}

impl<D: UnicodeDatabase> UnicodeDatabase for UnicodeBidiDatabase<D> {
    fn is_assigned(&self, cp: u32) -> bool {
        self.assigned.is_assigned(cp)
    }

    fn bidi_category(&self, cp: u32) -> BidiCategory {
        char::from_u32(cp)
            .map(|c| unicode_bidi::bidi_class(c).into())
            .unwrap_or(BidiCategory::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfkc_composes_and_folds_compatibility_forms() {
        // e + COMBINING ACUTE -> é
        assert_eq!(Nfkc.normalize(&['e', '\u{0301}']), vec!['\u{00E9}']);
        // FULLWIDTH LATIN CAPITAL A -> A
        assert_eq!(Nfkc.normalize(&['\u{FF21}']), vec!['A']);
        // LATIN SMALL LIGATURE FI -> fi
        assert_eq!(Nfkc.normalize(&['\u{FB01}']), vec!['f', 'i']);
    }

    #[test]
    fn rfc3454_database_uses_unicode_32_assignment() {
        let db = Rfc3454Database;
        assert!(db.is_assigned('a' as u32));
        // Added in Unicode 4.0.
        assert!(!db.is_assigned(0x0221));
        assert!(!db.is_assigned(0xE0000));
    }

    #[test]
    fn rfc3454_database_bidi_categories() {
        let db = Rfc3454Database;
        assert_eq!(db.bidi_category('a' as u32), BidiCategory::L);
        assert_eq!(db.bidi_category(0x05D0), BidiCategory::R);
        assert_eq!(db.bidi_category(0x0627), BidiCategory::R);
        assert_eq!(db.bidi_category('1' as u32), BidiCategory::Other);
        assert_eq!(db.bidi_category(' ' as u32), BidiCategory::Other);
    }

    #[test]
    fn unicode_bidi_database_distinguishes_al() {
        let db = UnicodeBidiDatabase::<Rfc3454Database>::default();
        assert_eq!(db.bidi_category(0x0627), BidiCategory::AL);
        assert_eq!(db.bidi_category(0x05D0), BidiCategory::R);
        assert_eq!(db.bidi_category('z' as u32), BidiCategory::L);
        assert_eq!(db.bidi_category(0xD800), BidiCategory::Other);
        assert!(!db.is_assigned(0x0221));
    }

    #[test]
    fn rand_al_grouping() {
        assert!(BidiCategory::R.is_rand_al());
        assert!(BidiCategory::AL.is_rand_al());
        assert!(!BidiCategory::L.is_rand_al());
        assert!(!BidiCategory::Other.is_rand_al());
    }
}
