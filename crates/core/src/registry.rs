//! One shared [`StringPrep`] per profile.
//!
//! The registry is an explicit value: build it once at startup, then hand
//! out `&ProfileRegistry` to whatever needs to prepare strings. Each profile
//! is built on first use inside a `OnceLock`, so concurrent first callers
//! all receive the same instance.
//!
//! # Example
//! ```
//! use strprep_core::{ProfileId, ProfileRegistry};
//!
//! let registry = ProfileRegistry::new();
//! let nameprep = registry.get(ProfileId::NamePrep);
//! assert_eq!(nameprep.prepare("Example", false).unwrap(), "example");
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::engine::StringPrep;
use crate::error::Result;
use crate::profile::{Profile, ProfileId};
use crate::unicode::{Nfkc, Normalizer, Rfc3454Database, UnicodeDatabase};

pub struct ProfileRegistry {
    normalizer: Arc<dyn Normalizer>,
    database: Arc<dyn UnicodeDatabase>,
    slots: [OnceLock<StringPrep>; ProfileId::ALL.len()],
}

impl ProfileRegistry {
    /// Registry with NFKC and the Unicode 3.2 database, built lazily.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The shared instance for `id`, building it on first call.
    pub fn get(&self, id: ProfileId) -> &StringPrep {
        self.slots[id.index()].get_or_init(|| {
            let profile = Profile::new(id);
            tracing::debug!(
                profile = %id,
                rfc = id.rfc(),
                prohibited_ranges = profile.prohibited().len(),
                case_fold_entries = profile.case_fold_len(),
                bidi_check = profile.bidi_check_enabled(),
                "built stringprep profile"
            );
            StringPrep::with_capabilities(
                profile,
                Arc::clone(&self.normalizer),
                Arc::clone(&self.database),
            )
        })
    }

    /// Look up a profile by name (see [`ProfileId`]'s `FromStr`).
    pub fn get_by_name(&self, name: &str) -> Result<&StringPrep> {
        Ok(self.get(name.parse()?))
    }

    /// Whether `id` has been built yet.
    pub fn is_built(&self, id: ProfileId) -> bool {
        self.slots[id.index()].get().is_some()
    }

    /// Build every profile now.
    pub fn preload(&self) {
        for id in ProfileId::ALL {
            self.get(id);
        }
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let built: Vec<ProfileId> = ProfileId::ALL
            .into_iter()
            .filter(|&id| self.is_built(id))
            .collect();
        f.debug_struct("ProfileRegistry")
            .field("built", &built)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ProfileRegistry`].
///
/// Swap the Unicode capabilities when a host pins a different Unicode
/// version than the RFCs' 3.2.
pub struct RegistryBuilder {
    normalizer: Arc<dyn Normalizer>,
    database: Arc<dyn UnicodeDatabase>,
    eager: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            normalizer: Arc::new(Nfkc),
            database: Arc::new(Rfc3454Database),
            eager: false,
        }
    }

    pub fn normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    pub fn database(mut self, database: impl UnicodeDatabase + 'static) -> Self {
        self.database = Arc::new(database);
        self
    }

    /// Build all profiles in [`build`](Self::build) instead of on first use.
    pub fn eager(mut self, eager: bool) -> Self {
        self.eager = eager;
        self
    }

    pub fn build(self) -> ProfileRegistry {
        let registry = ProfileRegistry {
            normalizer: self.normalizer,
            database: self.database,
            slots: std::array::from_fn(|_| OnceLock::new()),
        };
        if self.eager {
            registry.preload();
        }
        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_id_returns_same_instance() {
        let registry = ProfileRegistry::new();
        let a = registry.get(ProfileId::NamePrep);
        let b = registry.get(ProfileId::NamePrep);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn distinct_ids_return_distinct_instances() {
        let registry = ProfileRegistry::new();
        let name = registry.get(ProfileId::NamePrep);
        let trace = registry.get(ProfileId::TracePrep);
        assert!(!std::ptr::eq(name, trace));
        assert_eq!(name.id(), ProfileId::NamePrep);
        assert_eq!(trace.id(), ProfileId::TracePrep);
    }

    #[test]
    fn builds_lazily_unless_eager() {
        let lazy = ProfileRegistry::new();
        assert!(!lazy.is_built(ProfileId::SaslPrep));
        lazy.get(ProfileId::SaslPrep);
        assert!(lazy.is_built(ProfileId::SaslPrep));
        assert!(!lazy.is_built(ProfileId::NamePrep));

        let eager = ProfileRegistry::builder().eager(true).build();
        assert!(ProfileId::ALL.iter().all(|&id| eager.is_built(id)));
    }

    #[test]
    fn get_by_name_parses_profile() {
        let registry = ProfileRegistry::new();
        let by_name = registry.get_by_name("nodeprep").unwrap();
        assert!(std::ptr::eq(by_name, registry.get(ProfileId::NodePrep)));
        assert!(registry.get_by_name("bogus").is_err());
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProfileRegistry>();
    }
}
