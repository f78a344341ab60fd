//! Error types for the stringprep engine.

use std::fmt;

use thiserror::Error;

/// Which bidirectional rule (RFC 3454 section 6) a string broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiViolation {
    /// The string holds both RandALCat and LCat characters.
    MixedDirection,
    /// The string holds a RandALCat character but does not start and end
    /// with one.
    RandAlCatBoundary,
}

impl fmt::Display for BidiViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedDirection => f.write_str("mixed right-to-left and left-to-right characters"),
            Self::RandAlCatBoundary => {
                f.write_str("right-to-left string must start and end with a right-to-left character")
            }
        }
    }
}

/// Primary error type for string preparation.
///
/// Messages carry the failing position but never the input itself, since
/// prepared strings are often passwords.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepError {
    #[error("malformed input: unpaired surrogate {unit:#06x} at index {index}")]
    MalformedInput { unit: u16, index: usize },

    #[error("prohibited character U+{codepoint:04X} at index {index}")]
    ProhibitedCharacter { codepoint: u32, index: usize },

    #[error("unassigned code point U+{codepoint:04X} at index {index}")]
    UnassignedCodepoint { codepoint: u32, index: usize },

    #[error("bidirectional check failed: {reason}")]
    BidiViolation { reason: BidiViolation },

    #[error("invalid range table: {0}")]
    InvalidRangeTable(String),

    #[error("invalid mapping table: {0}")]
    InvalidMappingTable(String),

    #[error("unknown stringprep profile: {0}")]
    UnknownProfile(String),
}

impl PrepError {
    /// The offending code point, for errors raised by a pipeline check.
    pub fn codepoint(&self) -> Option<u32> {
        match self {
            Self::ProhibitedCharacter { codepoint, .. }
            | Self::UnassignedCodepoint { codepoint, .. } => Some(*codepoint),
            _ => None,
        }
    }

    /// Position of the failure.
    ///
    /// For `MalformedInput` this is a UTF-16 code unit index into the input;
    /// for the check errors it is a code point index into the normalized
    /// sequence.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { index, .. }
            | Self::ProhibitedCharacter { index, .. }
            | Self::UnassignedCodepoint { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Convenience Result type alias for PrepError.
pub type Result<T> = std::result::Result<T, PrepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_codepoint_as_hex() {
        let err = PrepError::ProhibitedCharacter {
            codepoint: 0x7F,
            index: 4,
        };
        assert_eq!(err.to_string(), "prohibited character U+007F at index 4");
    }

    #[test]
    fn display_includes_bidi_reason() {
        let err = PrepError::BidiViolation {
            reason: BidiViolation::MixedDirection,
        };
        assert!(err.to_string().contains("mixed right-to-left"));
    }

    #[test]
    fn position_accessors() {
        let err = PrepError::UnassignedCodepoint {
            codepoint: 0x0221,
            index: 2,
        };
        assert_eq!(err.codepoint(), Some(0x0221));
        assert_eq!(err.index(), Some(2));

        let err = PrepError::MalformedInput {
            unit: 0xD800,
            index: 1,
        };
        assert_eq!(err.codepoint(), None);
        assert_eq!(err.index(), Some(1));

        let err = PrepError::UnknownProfile("foo".into());
        assert_eq!(err.index(), None);
    }
}
