//! Tests for ProfileRegistry sharing and configuration.

use std::thread;

use strprep_core::{
    BidiViolation, Normalizer, PrepError, ProfileId, ProfileRegistry, Rfc3454Database,
    UnicodeBidiDatabase,
};

#[test]
fn test_registry_returns_cached_instance() {
    let registry = ProfileRegistry::new();
    let a = registry.get(ProfileId::NamePrep);
    let b = registry.get(ProfileId::NamePrep);
    let c = registry.get(ProfileId::TracePrep);
    assert!(std::ptr::eq(a, b));
    assert!(!std::ptr::eq(a, c));
}

/// Racing first callers all observe one instance.
#[test]
fn test_concurrent_first_access_converges() {
    let registry = ProfileRegistry::new();
    let addrs: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    let prep = registry.get(ProfileId::SaslPrep);
                    prep as *const _ as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        addrs[0],
        registry.get(ProfileId::SaslPrep) as *const _ as usize
    );
}

#[test]
fn test_concurrent_prepare_on_shared_profile() {
    let registry = ProfileRegistry::builder().eager(true).build();
    let prep = registry.get(ProfileId::NamePrep);
    thread::scope(|s| {
        for i in 0..4 {
            s.spawn(move || {
                for _ in 0..100 {
                    let input = format!("User{i}\u{00AD}Name");
                    assert_eq!(prep.prepare(&input, false).unwrap(), format!("user{i}name"));
                }
            });
        }
    });
}

struct Passthrough;

impl Normalizer for Passthrough {
    fn normalize(&self, input: &[char]) -> Vec<char> {
        input.to_vec()
    }
}

#[test]
fn test_builder_injects_normalizer() {
    let registry = ProfileRegistry::builder().normalizer(Passthrough).build();
    assert_eq!(
        registry.get(ProfileId::TracePrep).prepare("\u{FB01}", false).unwrap(),
        "\u{FB01}"
    );
    let default = ProfileRegistry::new();
    assert_eq!(
        default.get(ProfileId::TracePrep).prepare("\u{FB01}", false).unwrap(),
        "fi"
    );
}

/// U+0860 (Syriac, Unicode 10) is AL today but unassigned in Unicode 3.2.
#[test]
fn test_builder_injects_database() {
    let pinned = ProfileRegistry::new();
    assert_eq!(
        pinned.get(ProfileId::NamePrep).prepare("\u{0860}a", true).unwrap(),
        "\u{0860}a"
    );

    let current = ProfileRegistry::builder()
        .database(UnicodeBidiDatabase::new(Rfc3454Database))
        .build();
    assert_eq!(
        current.get(ProfileId::NamePrep).prepare("\u{0860}a", true),
        Err(PrepError::BidiViolation {
            reason: BidiViolation::MixedDirection
        })
    );
}

#[test]
fn test_profile_id_serde() {
    assert_eq!(serde_json::to_string(&ProfileId::SaslPrep).unwrap(), "\"saslprep\"");
    let id: ProfileId = serde_json::from_str("\"iscsiprep\"").unwrap();
    assert_eq!(id, ProfileId::IscsiPrep);
    let ids: Vec<ProfileId> = serde_json::from_str("[\"nameprep\", \"traceprep\"]").unwrap();
    assert_eq!(ids, vec![ProfileId::NamePrep, ProfileId::TracePrep]);
}

#[test]
fn test_get_by_name() {
    let registry = ProfileRegistry::new();
    assert_eq!(
        registry.get_by_name("SASLprep").unwrap().prepare("USER", false).unwrap(),
        "USER"
    );
    assert!(matches!(
        registry.get_by_name("stringprep"),
        Err(PrepError::UnknownProfile(_))
    ));
}
