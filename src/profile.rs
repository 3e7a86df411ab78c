//! Entity profiles: the atomic unit of comparison.
//!
//! A profile is a unique key (a URL-like string) plus a set of
//! [`Attribute`] pairs. Downstream blocking, matching and clustering code
//! relies on profiles being usable as members of hash collections, so the
//! equality and hash contract here must stay mutually consistent.

use std::collections::hash_map::DefaultHasher;
use std::collections::{hash_set, BTreeSet, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::error::ValidationError;

/// The representation of a single entity or record.
///
/// The key is fixed at construction. Attributes accumulate through
/// [`add_attribute`](Self::add_attribute) and are never removed; adding a
/// pair that is already present is a no-op. Several attributes may share
/// a name as long as their values differ.
///
/// Profiles are not internally synchronized. Populate a profile from a
/// single owner, then share it read-only (for example behind an `Arc`).
///
/// # Examples
///
/// ```
/// use entity_profile::EntityProfile;
///
/// let mut profile = EntityProfile::new("http://example.org/e1");
/// profile.add_attribute("name", "John");
/// profile.add_attribute("surname", "Smith");
/// profile.add_attribute("name", "John");
///
/// assert_eq!(profile.profile_size(), 2);
/// assert_eq!(profile.attribute_value("name"), Some("John"));
/// assert_eq!(profile.attribute_value("missing"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityProfile {
    url: String,

    #[serde(default)]
    attributes: HashSet<Attribute>,
}

impl EntityProfile {
    /// Creates an empty profile identified by `url`.
    ///
    /// Any string is accepted as a key, including the empty string.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            attributes: HashSet::new(),
        }
    }

    /// Creates an empty profile from a key that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for `url` if the key is
    /// `None`. Emptiness is not checked.
    pub fn try_new<S: Into<String>>(url: Option<S>) -> Result<Self, ValidationError> {
        match url {
            Some(url) => Ok(Self::new(url)),
            None => {
                log::debug!("rejecting entity profile without a url");
                Err(ValidationError::missing("url"))
            }
        }
    }

    /// Creates a profile and populates it from `attributes`.
    #[must_use]
    pub fn with_attributes<I>(url: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Attribute>,
    {
        let mut profile = Self::new(url);
        profile.extend(attributes.into_iter().map(Into::into));
        profile
    }

    /// Adds the pair `(name, value)`. Adding an existing pair is a no-op.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert_attribute(Attribute::new(name, value));
    }

    /// Adds a pair whose fields may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if either field is `None`;
    /// the profile is left unchanged.
    pub fn try_add_attribute<N, V>(
        &mut self,
        name: Option<N>,
        value: Option<V>,
    ) -> Result<(), ValidationError>
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.insert_attribute(Attribute::try_new(name, value)?);
        Ok(())
    }

    /// Inserts an attribute, returning true if the set grew.
    pub fn insert_attribute(&mut self, attribute: Attribute) -> bool {
        let inserted = self.attributes.insert(attribute);
        if !inserted {
            log::trace!("{}: duplicate attribute collapsed", self.url);
        }
        inserted
    }

    /// Returns the identifying key.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the number of distinct attributes.
    #[must_use]
    pub fn profile_size(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if no attributes have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns a read-only view of the attribute set.
    #[must_use]
    pub fn attributes(&self) -> &HashSet<Attribute> {
        &self.attributes
    }

    /// Iterates over the attributes in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// Returns the value of the first attribute named `name`.
    ///
    /// Iteration order is unspecified, so when several attributes share
    /// `name` any one of their values may be returned. Use
    /// [`attribute_values`](Self::attribute_values) to see all of them.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name() == name)
            .map(Attribute::value)
    }

    /// Iterates over every value stored under `name`.
    pub fn attribute_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes
            .iter()
            .filter(move |attr| attr.name() == name)
            .map(Attribute::value)
    }

    /// Returns true if the exact pair `(name, value)` is present.
    #[must_use]
    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.attributes
            .iter()
            .any(|attr| attr.name() == name && attr.value() == value)
    }

    /// Returns the distinct attribute names in sorted order.
    #[must_use]
    pub fn attribute_names(&self) -> BTreeSet<&str> {
        self.attributes.iter().map(Attribute::name).collect()
    }

    /// Returns the attributes sorted by name, then value.
    #[must_use]
    pub fn sorted_attributes(&self) -> Vec<&Attribute> {
        let mut sorted: Vec<&Attribute> = self.attributes.iter().collect();
        sorted.sort();
        sorted
    }
}

impl PartialEq for EntityProfile {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && self.attributes == other.attributes
    }
}

impl Eq for EntityProfile {}

impl Hash for EntityProfile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Wrapping sum over fixed-key per-attribute hashes: independent of
        // set iteration order.
        let combined = self.attributes.iter().fold(0u64, |acc, attr| {
            let mut h = DefaultHasher::new();
            attr.hash(&mut h);
            acc.wrapping_add(h.finish())
        });
        self.url.hash(state);
        self.attributes.len().hash(state);
        combined.hash(state);
    }
}

impl fmt::Display for EntityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityProfile{{url={}, attributes=[", self.url)?;
        for (i, attr) in self.sorted_attributes().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{attr}")?;
        }
        write!(f, "]}}")
    }
}

impl Extend<Attribute> for EntityProfile {
    fn extend<T: IntoIterator<Item = Attribute>>(&mut self, iter: T) {
        for attr in iter {
            self.insert_attribute(attr);
        }
    }
}

impl<'a> IntoIterator for &'a EntityProfile {
    type Item = &'a Attribute;
    type IntoIter = hash_set::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of<T: Hash>(t: &T) -> u64 {
        let mut h = DefaultHasher::new();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_profile_creation() {
        let profile = EntityProfile::new("http://example.org/e1");
        assert_eq!(profile.url(), "http://example.org/e1");
        assert_eq!(profile.profile_size(), 0);
        assert!(profile.is_empty());
    }

    #[test]
    fn test_profile_empty_url_accepted() {
        let profile = EntityProfile::try_new(Some("")).unwrap();
        assert_eq!(profile.url(), "");
    }

    #[test]
    fn test_profile_missing_url_rejected() {
        let err = EntityProfile::try_new(None::<String>).unwrap_err();
        assert_eq!(err, ValidationError::missing("url"));
    }

    #[test]
    fn test_add_duplicate_attribute() {
        let mut profile = EntityProfile::new("e");
        profile.add_attribute("name", "John");
        let before = profile.attributes().clone();
        profile.add_attribute("name", "John");

        assert_eq!(profile.profile_size(), 1);
        assert_eq!(profile.attributes(), &before);
    }

    #[test]
    fn test_insert_attribute_reports_growth() {
        let mut profile = EntityProfile::new("e");
        assert!(profile.insert_attribute(Attribute::new("a", "1")));
        assert!(!profile.insert_attribute(Attribute::new("a", "1")));
        assert!(profile.insert_attribute(Attribute::new("a", "2")));
        assert_eq!(profile.profile_size(), 2);
    }

    #[test]
    fn test_repeated_insert_keeps_single_copy() {
        let mut profile = EntityProfile::new("e");
        let attr = Attribute::new("name", "John");
        let grew: Vec<bool> = (0..5).map(|_| profile.insert_attribute(attr.clone())).collect();

        assert_eq!(grew, vec![true, false, false, false, false]);
        assert_eq!(profile.profile_size(), 1);
        assert!(profile.attributes().contains(&attr));
    }

    #[test]
    fn test_multi_valued_attribute() {
        let mut profile = EntityProfile::new("e");
        profile.add_attribute("name1", "A");
        profile.add_attribute("name1", "B");

        assert_eq!(profile.profile_size(), 2);
        let value = profile.attribute_value("name1").unwrap();
        assert!(value == "A" || value == "B");

        let mut all: Vec<&str> = profile.attribute_values("name1").collect();
        all.sort_unstable();
        assert_eq!(all, vec!["A", "B"]);
    }

    #[test]
    fn test_attribute_value_absent() {
        let mut profile = EntityProfile::new("e");
        profile.add_attribute("name", "John");
        assert_eq!(profile.attribute_value("absent"), None);
        assert_eq!(profile.attribute_values("absent").count(), 0);
    }

    #[test]
    fn test_try_add_attribute_leaves_profile_unchanged() {
        let mut profile = EntityProfile::new("e");
        let err = profile
            .try_add_attribute(Some("name"), None::<String>)
            .unwrap_err();
        assert_eq!(err.field(), "value");
        assert!(profile.is_empty());

        profile.try_add_attribute(Some("name"), Some("John")).unwrap();
        assert!(profile.contains("name", "John"));
    }

    #[test]
    fn test_profile_equality_ignores_insertion_order() {
        let mut p = EntityProfile::new("e");
        p.add_attribute("name", "John");
        p.add_attribute("surname", "Smith");

        let mut q = EntityProfile::new("e");
        q.add_attribute("surname", "Smith");
        q.add_attribute("name", "John");

        assert_eq!(p, q);
        assert_eq!(hash_of(&p), hash_of(&q));
    }

    #[test]
    fn test_profile_inequality() {
        let p = EntityProfile::with_attributes("e1", [("name", "John")]);
        let different_url = EntityProfile::with_attributes("e2", [("name", "John")]);
        let different_attrs = EntityProfile::with_attributes("e1", [("name", "Jane")]);
        let superset = EntityProfile::with_attributes("e1", [("name", "John"), ("age", "30")]);

        assert_ne!(p, different_url);
        assert_ne!(p, different_attrs);
        assert_ne!(p, superset);
    }

    #[test]
    fn test_profile_hash_tracks_attributes() {
        let mut p = EntityProfile::new("e");
        let empty = hash_of(&p);
        p.add_attribute("name", "John");
        assert_ne!(hash_of(&p), empty);
    }

    #[test]
    fn test_attribute_names_sorted() {
        let profile = EntityProfile::with_attributes(
            "e",
            [("surname", "Smith"), ("name", "John"), ("name", "Johnny")],
        );
        let names: Vec<&str> = profile.attribute_names().into_iter().collect();
        assert_eq!(names, vec!["name", "surname"]);
    }

    #[test]
    fn test_profile_display() {
        let profile =
            EntityProfile::with_attributes("e1", [("surname", "Smith"), ("name", "John")]);
        assert_eq!(
            format!("{profile}"),
            "EntityProfile{url=e1, attributes=[name=John, surname=Smith]}"
        );
        assert_eq!(
            format!("{}", EntityProfile::new("e2")),
            "EntityProfile{url=e2, attributes=[]}"
        );
    }

    #[test]
    fn test_profile_iteration() {
        let profile = EntityProfile::with_attributes("e", [("a", "1"), ("b", "2")]);
        assert_eq!(profile.iter().count(), 2);
        assert_eq!((&profile).into_iter().count(), profile.profile_size());
    }
}
