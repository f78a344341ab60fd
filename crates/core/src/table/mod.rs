//! Code point tables.
//!
//! This module contains:
//! - `range` - sorted disjoint range sets (prohibition, deletion, bidi classes)
//! - `mapping` - exact-match substitution tables (case folding)
//! - `rfc3454` - the literal RFC 3454 appendix tables

pub mod mapping;
pub mod range;
pub mod rfc3454;

pub use mapping::{MappingEntry, MappingTable};
pub use range::{CodepointRange, MAX_CODEPOINT, RangeTable};
