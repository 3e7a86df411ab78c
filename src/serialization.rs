//! Profile serialization helpers.
//!
//! Serde already provides the derives; these helpers keep JSON formatting
//! in one place and map failures into [`ProfileError`].

use crate::error::{ProfileError, ProfileResult};
use crate::profile::EntityProfile;

/// Serialize a profile to pretty JSON.
///
/// # Errors
///
/// Returns [`ProfileError::Serialization`] if encoding fails.
pub fn to_json_pretty(profile: &EntityProfile) -> ProfileResult<String> {
    serde_json::to_string_pretty(profile)
        .map_err(|e| ProfileError::serialization(format!("serialize profile: {e}")))
}

/// Deserialize a profile from JSON.
///
/// Duplicate attributes in the input collapse into one.
///
/// # Errors
///
/// Returns [`ProfileError::Serialization`] on malformed input, including a
/// missing `url`.
pub fn from_json(s: &str) -> ProfileResult<EntityProfile> {
    serde_json::from_str::<EntityProfile>(s)
        .map_err(|e| ProfileError::serialization(format!("deserialize profile: {e}")))
}

/// Deserialize a list of profiles from a JSON array.
///
/// # Errors
///
/// Returns [`ProfileError::Serialization`] on malformed input.
pub fn from_json_array(s: &str) -> ProfileResult<Vec<EntityProfile>> {
    let profiles = serde_json::from_str::<Vec<EntityProfile>>(s)
        .map_err(|e| ProfileError::serialization(format!("deserialize profiles: {e}")))?;
    log::debug!("decoded {} entity profiles", profiles.len());
    Ok(profiles)
}
