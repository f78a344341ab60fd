//! strprep - RFC 3454 stringprep for Rust.
//!
//! Canonicalizes user-supplied text (user names, passwords, domain labels,
//! XMPP identifiers, iSCSI names, trace tokens) into a stable, comparable
//! form. One engine runs every profile:
//!
//! 1. map (delete, fold case, map spaces)
//! 2. normalize (NFKC)
//! 3. reject prohibited characters
//! 4. reject unassigned code points (stored strings only)
//! 5. enforce the bidi rules
//!
//! ```
//! use strprep_core::{ProfileId, ProfileRegistry};
//!
//! let registry = ProfileRegistry::new();
//! let saslprep = registry.get(ProfileId::SaslPrep);
//! assert_eq!(saslprep.prepare("I\u{00AD}X", false).unwrap(), "IX");
//! ```

pub mod decode;
pub mod engine;
pub mod error;
pub mod profile;
pub mod registry;
pub mod table;
pub mod unicode;

pub use engine::StringPrep;
pub use error::{BidiViolation, PrepError, Result};
pub use profile::{Profile, ProfileId};
pub use registry::{ProfileRegistry, RegistryBuilder};
pub use unicode::{
    BidiCategory, Nfkc, Normalizer, Rfc3454Database, UnicodeBidiDatabase, UnicodeDatabase,
};
