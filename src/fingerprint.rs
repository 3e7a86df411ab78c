//! Stable content fingerprints.
//!
//! `Hash` on profiles is only stable within a process. Fingerprints are
//! blake3 digests that stay identical across runs and machines, so they can
//! be persisted or used as blocking keys.
//!
//! Each string is length-prefixed before hashing. A profile digest sorts
//! its attribute digests first, making it independent of set order.

use std::fmt;

use blake3::Hasher;
use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::profile::EntityProfile;

const ATTRIBUTE_DOMAIN: &[u8] = b"attribute\0";
const PROFILE_DOMAIN: &[u8] = b"entity-profile\0";

/// A 32-byte blake3 content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the first eight bytes as a little-endian integer.
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<blake3::Hash> for Fingerprint {
    fn from(hash: blake3::Hash) -> Self {
        Self(*hash.as_bytes())
    }
}

fn update_str(h: &mut Hasher, s: &str) {
    h.update(&(s.len() as u64).to_le_bytes());
    h.update(s.as_bytes());
}

impl Attribute {
    /// Returns a stable digest of this attribute.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        let mut h = Hasher::new();
        h.update(ATTRIBUTE_DOMAIN);
        update_str(&mut h, self.name());
        update_str(&mut h, self.value());
        h.finalize().into()
    }
}

impl EntityProfile {
    /// Returns a stable digest of the url and attribute set.
    ///
    /// Equal profiles always have equal fingerprints.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        let mut digests: Vec<Fingerprint> = self.iter().map(Attribute::fingerprint).collect();
        digests.sort_unstable();

        let mut h = Hasher::new();
        h.update(PROFILE_DOMAIN);
        update_str(&mut h, self.url());
        h.update(&(digests.len() as u64).to_le_bytes());
        for digest in &digests {
            h.update(digest.as_bytes());
        }
        h.finalize().into()
    }
}
