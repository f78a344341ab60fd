//! The stringprep pipeline (RFC 3454 section 3).
//!
//! Each call runs the same fixed sequence against an immutable profile:
//! map, normalize, prohibit, unassigned check, bidi check, emit. The first
//! failing step ends the call; nothing is retried and no partial output is
//! returned.

use std::fmt;
use std::sync::Arc;

use crate::decode;
use crate::error::{BidiViolation, PrepError, Result};
use crate::profile::{Profile, ProfileId};
use crate::unicode::{Nfkc, Normalizer, Rfc3454Database, UnicodeDatabase};

/// Pipeline step, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Decode,
    Prohibit,
    Unassigned,
    Bidi,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Prohibit => "prohibit",
            Self::Unassigned => "unassigned",
            Self::Bidi => "bidi",
        }
    }
}

/// A profile bound to its Unicode capabilities.
///
/// `StringPrep` is immutable and `Send + Sync`; share one instance between
/// threads freely.
#[derive(Clone)]
pub struct StringPrep {
    profile: Profile,
    normalizer: Arc<dyn Normalizer>,
    database: Arc<dyn UnicodeDatabase>,
}

impl StringPrep {
    /// Build a profile with NFKC and the Unicode 3.2 database.
    pub fn new(id: ProfileId) -> Self {
        Self::with_capabilities(Profile::new(id), Arc::new(Nfkc), Arc::new(Rfc3454Database))
    }

    pub fn with_capabilities(
        profile: Profile,
        normalizer: Arc<dyn Normalizer>,
        database: Arc<dyn UnicodeDatabase>,
    ) -> Self {
        Self {
            profile,
            normalizer,
            database,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn id(&self) -> ProfileId {
        self.profile.id()
    }

    /// Prepare `text`.
    ///
    /// `allow_unassigned` selects between the two RFC 3454 section 7 modes:
    /// `false` for stored strings (unassigned code points are rejected),
    /// `true` for queries (they pass through).
    pub fn prepare(&self, text: &str, allow_unassigned: bool) -> Result<String> {
        self.prepare_chars(&decode::decode_str(text), allow_unassigned)
    }

    /// Prepare UTF-16 input, rejecting unpaired surrogates.
    pub fn prepare_utf16(&self, units: &[u16], allow_unassigned: bool) -> Result<String> {
        let chars = decode::decode_utf16(units).map_err(|e| self.reject(Stage::Decode, e))?;
        self.prepare_chars(&chars, allow_unassigned)
    }

    /// Prepare an already decoded code point sequence.
    pub fn prepare_chars(&self, input: &[char], allow_unassigned: bool) -> Result<String> {
        let mapped = self.map(input);
        let normalized = self.normalizer.normalize(&mapped);

        self.check_prohibited(&normalized)
            .map_err(|e| self.reject(Stage::Prohibit, e))?;
        if !allow_unassigned {
            self.check_unassigned(&normalized)
                .map_err(|e| self.reject(Stage::Unassigned, e))?;
        }
        if self.profile.bidi_check_enabled() {
            self.check_bidi(&normalized)
                .map_err(|e| self.reject(Stage::Bidi, e))?;
        }

        Ok(decode::encode(&normalized))
    }

    fn map(&self, input: &[char]) -> Vec<char> {
        let mut out = Vec::with_capacity(input.len());
        for &c in input {
            match self.profile.map(c as u32) {
                None => out.push(c),
                Some(replacement) => {
                    out.extend(replacement.iter().filter_map(|&cp| char::from_u32(cp)));
                }
            }
        }
        out
    }

    fn check_prohibited(&self, chars: &[char]) -> Result<()> {
        match chars
            .iter()
            .position(|&c| self.profile.is_prohibited(c as u32))
        {
            Some(index) => Err(PrepError::ProhibitedCharacter {
                codepoint: chars[index] as u32,
                index,
            }),
            None => Ok(()),
        }
    }

    fn check_unassigned(&self, chars: &[char]) -> Result<()> {
        match chars
            .iter()
            .position(|&c| !self.database.is_assigned(c as u32))
        {
            Some(index) => Err(PrepError::UnassignedCodepoint {
                codepoint: chars[index] as u32,
                index,
            }),
            None => Ok(()),
        }
    }

    /// RFC 3454 section 6: a string holding any RandALCat character must hold
    /// no LCat character and must start and end with RandALCat.
    fn check_bidi(&self, chars: &[char]) -> Result<()> {
        let mut has_rand_al = false;
        let mut has_l = false;
        for &c in chars {
            let category = self.database.bidi_category(c as u32);
            has_rand_al |= category.is_rand_al();
            has_l |= category.is_l();
        }

        if !has_rand_al {
            return Ok(());
        }
        if has_l {
            return Err(PrepError::BidiViolation {
                reason: BidiViolation::MixedDirection,
            });
        }

        let is_rand_al = |c: Option<&char>| {
            c.is_some_and(|&c| self.database.bidi_category(c as u32).is_rand_al())
        };
        if !is_rand_al(chars.first()) || !is_rand_al(chars.last()) {
            return Err(PrepError::BidiViolation {
                reason: BidiViolation::RandAlCatBoundary,
            });
        }
        Ok(())
    }

    fn reject(&self, stage: Stage, err: PrepError) -> PrepError {
        tracing::trace!(
            profile = %self.profile.id(),
            stage = stage.as_str(),
            codepoint = err.codepoint(),
            index = err.index(),
            "stringprep rejected input: {err}"
        );
        err
    }
}

impl fmt::Debug for StringPrep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringPrep")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::BidiCategory;

    /// Normalizer that leaves input untouched, to isolate the mapping step.
    struct Identity;

    impl Normalizer for Identity {
        fn normalize(&self, input: &[char]) -> Vec<char> {
            input.to_vec()
        }
    }

    /// Database that treats everything as assigned LCat except `x` (R) and
    /// `?` (unassigned).
    struct Toy;

    impl UnicodeDatabase for Toy {
        fn is_assigned(&self, cp: u32) -> bool {
            cp != '?' as u32
        }

        fn bidi_category(&self, cp: u32) -> BidiCategory {
            match char::from_u32(cp) {
                Some('x') => BidiCategory::R,
                Some('a'..='w') => BidiCategory::L,
                _ => BidiCategory::Other,
            }
        }
    }

    fn toy(id: ProfileId) -> StringPrep {
        StringPrep::with_capabilities(Profile::new(id), Arc::new(Identity), Arc::new(Toy))
    }

    #[test]
    fn normalization_runs_after_mapping() {
        let prep = StringPrep::new(ProfileId::NamePrep);
        // FULLWIDTH A folds to fullwidth a, then NFKC yields a.
        assert_eq!(prep.prepare("\u{FF21}", false).unwrap(), "a");
        // B.2 folds U+2168 ROMAN NUMERAL NINE to U+2178, NFKC to "ix".
        assert_eq!(prep.prepare("\u{2168}", false).unwrap(), "ix");
    }

    #[test]
    fn prohibited_index_counts_normalized_codepoints() {
        let prep = toy(ProfileId::SaslPrep);
        // Soft hyphen is deleted before the check, so DEL lands at index 2.
        let err = prep.prepare("a\u{AD}b\u{7F}", false).unwrap_err();
        assert_eq!(
            err,
            PrepError::ProhibitedCharacter {
                codepoint: 0x7F,
                index: 2
            }
        );
    }

    #[test]
    fn prohibited_wins_over_unassigned_and_bidi() {
        let prep = toy(ProfileId::SaslPrep);
        let err = prep.prepare("x?a\u{7F}", false).unwrap_err();
        assert!(matches!(err, PrepError::ProhibitedCharacter { index: 3, .. }));
    }

    #[test]
    fn unassigned_gate_uses_injected_database() {
        let prep = toy(ProfileId::SaslPrep);
        assert_eq!(
            prep.prepare("ab?", false),
            Err(PrepError::UnassignedCodepoint {
                codepoint: '?' as u32,
                index: 2
            })
        );
        assert_eq!(prep.prepare("ab?", true).unwrap(), "ab?");
    }

    #[test]
    fn bidi_rules_use_injected_database() {
        let prep = toy(ProfileId::SaslPrep);
        assert_eq!(prep.prepare("x1x", false).unwrap(), "x1x");
        assert_eq!(
            prep.prepare("xax", false),
            Err(PrepError::BidiViolation {
                reason: BidiViolation::MixedDirection
            })
        );
        assert_eq!(
            prep.prepare("x1", false),
            Err(PrepError::BidiViolation {
                reason: BidiViolation::RandAlCatBoundary
            })
        );
        assert_eq!(
            prep.prepare("1x", false),
            Err(PrepError::BidiViolation {
                reason: BidiViolation::RandAlCatBoundary
            })
        );
    }

    #[test]
    fn bidi_skipped_when_profile_disables_it() {
        let prep = toy(ProfileId::TracePrep);
        assert_eq!(prep.prepare("xax", false).unwrap(), "xax");
    }

    #[test]
    fn empty_input_is_empty_output() {
        for id in ProfileId::ALL {
            assert_eq!(StringPrep::new(id).prepare("", false).unwrap(), "");
        }
    }

    #[test]
    fn input_mapped_entirely_away_is_empty() {
        let prep = StringPrep::new(ProfileId::NamePrep);
        assert_eq!(prep.prepare("\u{AD}\u{200B}\u{FEFF}", false).unwrap(), "");
    }

    #[test]
    fn utf16_entry_point_decodes_then_prepares() {
        let prep = StringPrep::new(ProfileId::NamePrep);
        let units: Vec<u16> = "ABC".encode_utf16().collect();
        assert_eq!(prep.prepare_utf16(&units, false).unwrap(), "abc");
        assert!(matches!(
            prep.prepare_utf16(&[0x41, 0xDC00], false),
            Err(PrepError::MalformedInput {
                unit: 0xDC00,
                index: 1
            })
        ));
    }

    #[test]
    fn string_prep_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StringPrep>();
    }
}
