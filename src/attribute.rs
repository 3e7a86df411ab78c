//! Attribute name/value pairs.
//!
//! An attribute is one property of an entity. Attributes are immutable
//! once constructed and compare by value, so a single instance may be
//! cloned into any number of profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An immutable name/value pair describing one property of an entity.
///
/// Equality is exact string equality on both fields; no trimming or case
/// folding is applied. The derived hash feeds `name` before `value`, so
/// swapping the two yields a different attribute with a different hash.
///
/// # Examples
///
/// ```
/// use entity_profile::Attribute;
///
/// let a = Attribute::new("name", "John");
/// let b = Attribute::new("name", "John");
/// assert_eq!(a, b);
/// assert_ne!(a, Attribute::new("John", "name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Creates an attribute from a name and a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an attribute from fields that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if either the name or the
    /// value is `None`. The name is checked first.
    pub fn try_new<N, V>(name: Option<N>, value: Option<V>) -> Result<Self, ValidationError>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let Some(name) = name else {
            log::debug!("rejecting attribute without a name");
            return Err(ValidationError::missing("name"));
        };
        let Some(value) = value else {
            log::debug!("rejecting attribute without a value");
            return Err(ValidationError::missing("value"));
        };
        Ok(Self::new(name, value))
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the attribute, returning `(name, value)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl<N, V> From<(N, V)> for Attribute
where
    N: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
