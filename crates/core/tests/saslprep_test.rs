//! Tests for the RFC 4013 SASLprep profile.

use strprep_core::{BidiViolation, PrepError, ProfileId, StringPrep};

fn saslprep(data: &str, allow_unassigned: bool) -> Result<String, PrepError> {
    StringPrep::new(ProfileId::SaslPrep).prepare(data, allow_unassigned)
}

/// RFC 4013 section 3 examples.
#[test]
fn test_rfc4013_examples() {
    // SOFT HYPHEN mapped to nothing
    assert_eq!(saslprep("I\u{00AD}X", false).unwrap(), "IX");
    // no transformation
    assert_eq!(saslprep("user", false).unwrap(), "user");
    // case preserved, will not match #2
    assert_eq!(saslprep("USER", false).unwrap(), "USER");
    // output is NFKC, input in ISO 8859-1
    assert_eq!(saslprep("\u{00AA}", false).unwrap(), "a");
    // output is NFKC, will match #1
    assert_eq!(saslprep("\u{2168}", false).unwrap(), "IX");
    // Error - prohibited character
    assert_eq!(
        saslprep("\u{0007}", false),
        Err(PrepError::ProhibitedCharacter {
            codepoint: 0x07,
            index: 0
        })
    );
    // Error - bidirectional check
    assert_eq!(
        saslprep("\u{0627}1", false),
        Err(PrepError::BidiViolation {
            reason: BidiViolation::RandAlCatBoundary
        })
    );
}

/// ASCII strings pass through unchanged, including the ASCII space.
#[test]
fn test_ascii_passthrough() {
    assert_eq!(saslprep("hello", false).unwrap(), "hello");
    assert_eq!(saslprep("password123", false).unwrap(), "password123");
    assert_eq!(saslprep("Test String", false).unwrap(), "Test String");
}

/// No case folding: letters keep their case.
#[test]
fn test_case_preserved() {
    assert_eq!(saslprep("cFloersch", false).unwrap(), "cFloersch");
    assert_eq!(saslprep("Stra\u{00DF}E", false).unwrap(), "Stra\u{00DF}E");
    assert_eq!(saslprep("\u{0130}", false).unwrap(), "\u{0130}");
}

/// Non-ASCII spaces (table C.1.2) map to U+0020.
#[test]
fn test_non_ascii_space_mapping() {
    assert_eq!(saslprep("\u{00A0}", false).unwrap(), " ");
    assert_eq!(saslprep("\u{2002}", false).unwrap(), " ");
    assert_eq!(saslprep("\u{2003}", false).unwrap(), " ");
    assert_eq!(saslprep("\u{3000}", false).unwrap(), " ");
    assert_eq!(saslprep("a\u{00A0}b", false).unwrap(), "a b");
}

/// Table B.1 characters are removed.
#[test]
fn test_mapped_to_nothing() {
    assert_eq!(saslprep("pass\u{00AD}word", false).unwrap(), "password");
    assert_eq!(saslprep("pass\u{200B}word", false).unwrap(), "password");
    assert_eq!(saslprep("pass\u{FE0F}word", false).unwrap(), "password");
}

/// Prohibited characters fail with their position.
#[test]
fn test_prohibited_characters() {
    // ASCII control (C.2.1)
    assert!(matches!(
        saslprep("\u{0000}", false),
        Err(PrepError::ProhibitedCharacter { codepoint: 0, .. })
    ));
    assert_eq!(
        saslprep("test\u{007F}", false),
        Err(PrepError::ProhibitedCharacter {
            codepoint: 0x7F,
            index: 4
        })
    );
    // Private use (C.3)
    assert!(saslprep("\u{E000}", false).is_err());
    // Non-character (C.4)
    assert!(saslprep("\u{FFFF}", false).is_err());
    // Line and paragraph separators (C.2.2)
    assert!(saslprep("a\u{2028}b", false).is_err());
    assert!(saslprep("a\u{2029}b", false).is_err());
    // Tagging (C.9)
    assert!(saslprep("\u{E0001}", true).is_err());
}

/// Bidi rules from RFC 3454 section 6.
#[test]
fn test_bidirectional_check() {
    // Arabic text
    assert!(saslprep("\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064A}\u{0629}", false).is_ok());
    assert_eq!(
        saslprep("\u{0627}abc", false),
        Err(PrepError::BidiViolation {
            reason: BidiViolation::MixedDirection
        })
    );
    assert!(saslprep("hello", false).is_ok());
    // Digits between RandALCat characters are fine
    assert!(saslprep("\u{05D0}1\u{05D1}", false).is_ok());
}

/// Unassigned code points (Unicode 3.2, table A.1) are gated by the caller.
#[test]
fn test_unassigned_code_points() {
    assert_eq!(
        saslprep("\u{0221}", false),
        Err(PrepError::UnassignedCodepoint {
            codepoint: 0x0221,
            index: 0
        })
    );
    assert_eq!(saslprep("\u{0221}", true).unwrap(), "\u{0221}");

    assert!(saslprep("\u{038B}", false).is_err());
    assert!(saslprep("\u{038B}", true).is_ok());

    assert!(saslprep("\u{0560}", false).is_err());
    assert!(saslprep("\u{0560}", true).is_ok());

    assert_eq!(
        saslprep("hello\u{0221}world", false),
        Err(PrepError::UnassignedCodepoint {
            codepoint: 0x0221,
            index: 5
        })
    );
    assert_eq!(
        saslprep("hello\u{0221}world", true).unwrap(),
        "hello\u{0221}world"
    );
}
