//! # entity-profile - Entity representation for entity resolution
//!
//! An entity profile is the atomic unit of comparison in a deduplication
//! pipeline: a unique key (a URL-like string) plus a set of name/value
//! attributes. Blocking, similarity scoring, matching and clustering all
//! consume profiles, so the identity, equality and hash contract defined
//! here is exact and stable.
//!
//! ## Core Concepts
//!
//! - **Attribute**: An immutable name/value pair with value equality
//! - **EntityProfile**: A fixed key plus a growing set of attributes
//! - **Fingerprint**: A process-independent blake3 digest of either
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashSet;
//! use entity_profile::EntityProfile;
//!
//! let mut a = EntityProfile::new("http://example.org/e1");
//! a.add_attribute("name", "John");
//! a.add_attribute("surname", "Smith");
//!
//! let mut b = EntityProfile::new("http://example.org/e1");
//! b.add_attribute("surname", "Smith");
//! b.add_attribute("name", "John");
//!
//! assert_eq!(a, b);
//! assert_eq!(a.fingerprint(), b.fingerprint());
//!
//! let set: HashSet<EntityProfile> = [a, b].into_iter().collect();
//! assert_eq!(set.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute;
pub mod error;
pub mod fingerprint;
pub mod profile;
pub mod serialization;

// Re-export primary types at crate root for convenience
pub use attribute::Attribute;
pub use error::{ProfileError, ProfileResult, ValidationError};
pub use fingerprint::Fingerprint;
pub use profile::EntityProfile;
