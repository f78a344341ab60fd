//! Behavior of the Nameprep, Nodeprep, Resourceprep, iSCSI and trace
//! profiles, plus properties every profile shares.

use strprep_core::{BidiViolation, PrepError, ProfileId, ProfileRegistry};

fn prep(id: ProfileId, input: &str) -> Result<String, PrepError> {
    ProfileRegistry::new().get(id).prepare(input, false)
}

// =============================================================================
// Nameprep
// =============================================================================

#[test]
fn test_nameprep_case_folding() {
    assert_eq!(prep(ProfileId::NamePrep, "cFloersch").unwrap(), "cfloersch");
    assert_eq!(prep(ProfileId::NamePrep, "CAF\u{00C9}").unwrap(), "caf\u{00E9}");
    assert_eq!(prep(ProfileId::NamePrep, "Stra\u{00DF}e").unwrap(), "strasse");
    // Final sigma folds to sigma
    assert_eq!(prep(ProfileId::NamePrep, "\u{03A3}\u{03C2}").unwrap(), "\u{03C3}\u{03C3}");
}

/// Georgian capitals, Cherokee, U+04C0 and U+2132 had no lowercase in
/// Unicode 3.2 and pass through unchanged.
#[test]
fn test_nameprep_keeps_unicode_32_uncased_letters() {
    for input in ["\u{10A0}", "\u{13A0}", "\u{04C0}", "\u{2132}", "\u{2183}"] {
        assert_eq!(prep(ProfileId::NamePrep, input).as_deref(), Ok(input), "{input:?}");
    }
    assert_eq!(prep(ProfileId::NamePrep, "a\u{10A0}B").unwrap(), "a\u{10A0}b");
    let registry = ProfileRegistry::new();
    for id in [ProfileId::NodePrep, ProfileId::ResourcePrep, ProfileId::IscsiPrep] {
        assert_eq!(
            registry.get(id).prepare("\u{13A0}", true).unwrap(),
            "\u{13A0}",
            "{id}"
        );
    }
}

#[test]
fn test_nameprep_compatibility_forms() {
    assert_eq!(prep(ProfileId::NamePrep, "\u{FB01}ne").unwrap(), "fine");
    assert_eq!(prep(ProfileId::NamePrep, "\u{2168}").unwrap(), "ix");
    // Decomposed input composes
    assert_eq!(prep(ProfileId::NamePrep, "e\u{0301}").unwrap(), "\u{00E9}");
}

#[test]
fn test_nameprep_non_latin_passthrough() {
    let korean = "\u{C548}\u{B155}\u{D558}\u{C138}\u{C694}";
    assert_eq!(prep(ProfileId::NamePrep, korean).unwrap(), korean);

    let arabic = "\u{0645}\u{0631}\u{062D}\u{0628}\u{0627}";
    assert_eq!(prep(ProfileId::NamePrep, arabic).unwrap(), arabic);

    let hebrew = "\u{05E9}\u{05DC}\u{05D5}\u{05DD}";
    assert_eq!(prep(ProfileId::NamePrep, hebrew).unwrap(), hebrew);
}

#[test]
fn test_nameprep_bidi_rejection() {
    assert_eq!(
        prep(ProfileId::NamePrep, "\u{0627}abc"),
        Err(PrepError::BidiViolation {
            reason: BidiViolation::MixedDirection
        })
    );
    assert_eq!(
        prep(ProfileId::NamePrep, "abc\u{05D0}"),
        Err(PrepError::BidiViolation {
            reason: BidiViolation::MixedDirection
        })
    );
    assert_eq!(
        prep(ProfileId::NamePrep, "1\u{05D0}"),
        Err(PrepError::BidiViolation {
            reason: BidiViolation::RandAlCatBoundary
        })
    );
}

#[test]
fn test_nameprep_leaves_ascii_policy_to_idna() {
    // Nameprep does not prohibit ASCII space or ASCII controls.
    assert_eq!(prep(ProfileId::NamePrep, "a b").unwrap(), "a b");
    assert_eq!(prep(ProfileId::NamePrep, "a\u{0007}b").unwrap(), "a\u{0007}b");
    // Non-ASCII space that survives NFKC is prohibited.
    assert_eq!(
        prep(ProfileId::NamePrep, "a\u{1680}b"),
        Err(PrepError::ProhibitedCharacter {
            codepoint: 0x1680,
            index: 1
        })
    );
}

// =============================================================================
// Nodeprep / Resourceprep
// =============================================================================

#[test]
fn test_nodeprep_folds_and_rejects_reserved() {
    assert_eq!(prep(ProfileId::NodePrep, "Juliet").unwrap(), "juliet");
    assert_eq!(
        prep(ProfileId::NodePrep, "juliet@example"),
        Err(PrepError::ProhibitedCharacter {
            codepoint: '@' as u32,
            index: 6
        })
    );
    assert!(prep(ProfileId::NodePrep, "romeo&juliet").is_err());
    assert!(prep(ProfileId::NodePrep, "a/b").is_err());
    assert!(prep(ProfileId::NodePrep, "<tag>").is_err());
    assert!(prep(ProfileId::NodePrep, "\"quoted\"").is_err());
    assert_eq!(
        prep(ProfileId::NodePrep, "Jul iet"),
        Err(PrepError::ProhibitedCharacter {
            codepoint: 0x20,
            index: 3
        })
    );
}

#[test]
fn test_resourceprep_allows_punctuation_and_space() {
    assert_eq!(prep(ProfileId::ResourcePrep, "Home Office").unwrap(), "home office");
    assert_eq!(prep(ProfileId::ResourcePrep, "balcony/1@home").unwrap(), "balcony/1@home");
    assert!(prep(ProfileId::ResourcePrep, "tab\there").is_err());
}

// =============================================================================
// iSCSI
// =============================================================================

#[test]
fn test_iscsi_names() {
    assert_eq!(
        prep(ProfileId::IscsiPrep, "iqn.2001-04.com.Example:Storage.Disk2").unwrap(),
        "iqn.2001-04.com.example:storage.disk2"
    );
    assert_eq!(
        prep(ProfileId::IscsiPrep, "iqn.2001-04.com example"),
        Err(PrepError::ProhibitedCharacter {
            codepoint: 0x20,
            index: 15
        })
    );
    assert_eq!(
        prep(ProfileId::IscsiPrep, "iqn_x"),
        Err(PrepError::ProhibitedCharacter {
            codepoint: '_' as u32,
            index: 3
        })
    );
    assert!(prep(ProfileId::IscsiPrep, "eui,02004567").is_err());
    assert!(prep(ProfileId::IscsiPrep, "iqn\u{3002}com").is_err());
}

// =============================================================================
// Trace
// =============================================================================

#[test]
fn test_traceprep_preserves_case_and_spaces() {
    assert_eq!(prep(ProfileId::TracePrep, "Hello World").unwrap(), "Hello World");
    assert_eq!(prep(ProfileId::TracePrep, "Hello\u{00A0}World").unwrap(), "Hello World");
    // No B.1 deletion either.
    assert!(prep(ProfileId::TracePrep, "a\u{00AD}b").unwrap().contains('\u{00AD}'));
}

#[test]
fn test_traceprep_rejects_controls() {
    assert_eq!(
        prep(ProfileId::TracePrep, "Hello\u{0007}"),
        Err(PrepError::ProhibitedCharacter {
            codepoint: 0x07,
            index: 5
        })
    );
    assert!(prep(ProfileId::TracePrep, "a\u{0085}b").is_err());
}

#[test]
fn test_traceprep_skips_bidi() {
    assert_eq!(prep(ProfileId::TracePrep, "\u{0627}abc").unwrap(), "\u{0627}abc");
}

// =============================================================================
// Shared properties
// =============================================================================

#[test]
fn test_unassigned_gating_all_profiles() {
    let registry = ProfileRegistry::new();
    for id in ProfileId::ALL {
        let prep = registry.get(id);
        assert_eq!(
            prep.prepare("\u{0221}", false),
            Err(PrepError::UnassignedCodepoint {
                codepoint: 0x0221,
                index: 0
            }),
            "{id}"
        );
        assert_eq!(prep.prepare("\u{0221}", true).unwrap(), "\u{0221}", "{id}");
    }
}

#[test]
fn test_idempotence_all_profiles() {
    let inputs = [
        "hello",
        "Hello World",
        "cFloersch",
        "Stra\u{00DF}e",
        "\u{01C5}",
        "\u{FB01}ne",
        "\u{2168}",
        "I\u{00AD}X",
        "\u{00AA}",
        "CAF\u{00C9}",
        "e\u{0301}",
        "\u{C548}\u{B155}\u{D558}\u{C138}\u{C694}",
        "\u{0645}\u{0631}\u{062D}\u{0628}\u{0627}",
        "\u{03A3}\u{03C2}",
        "iqn.2001-04.com.Example:Storage",
        "\u{FF21}\u{FF22}\u{FF23}",
        "\u{0130}stanbul",
    ];
    let registry = ProfileRegistry::new();
    for id in ProfileId::ALL {
        let prep = registry.get(id);
        for input in inputs {
            let Ok(once) = prep.prepare(input, false) else {
                continue;
            };
            let twice = prep.prepare(&once, false);
            assert_eq!(twice.as_deref(), Ok(once.as_str()), "{id} {input:?}");
        }
    }
}

#[test]
fn test_failures_report_position() {
    let err = prep(ProfileId::SaslPrep, "ab\u{E000}").unwrap_err();
    assert_eq!(err.codepoint(), Some(0xE000));
    assert_eq!(err.index(), Some(2));
}
