//! Musician types

use crate::error::MusicianViolation;
use serde::{Deserialize, Serialize};

/// Shortest accepted musician name, in characters
pub const MIN_MUSICIAN_NAME_LEN: usize = 3;

/// A musician, also used as the create/update candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Musician {
    /// Unique musician name
    pub name: String,

    /// Role, e.g. "Guitarist"
    #[serde(default)]
    pub musician_type: String,
}

impl Musician {
    /// Create a new musician
    pub fn new(name: impl Into<String>, musician_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            musician_type: musician_type.into(),
        }
    }

    /// Check the name length
    ///
    /// # Errors
    /// Returns `NameTooShort` when the name has fewer than three characters
    pub fn validate(&self) -> std::result::Result<(), MusicianViolation> {
        let name_len = self.name.chars().count();
        if name_len < MIN_MUSICIAN_NAME_LEN {
            return Err(MusicianViolation::NameTooShort {
                min: MIN_MUSICIAN_NAME_LEN,
                actual: name_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_rule() {
        assert!(Musician::new("Bob", "Drummer").validate().is_ok());
        assert_eq!(
            Musician::new("Al", "Bassist").validate(),
            Err(MusicianViolation::NameTooShort { min: 3, actual: 2 })
        );
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Musician::new("John Doe", "Guitarist")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "John Doe", "musicianType": "Guitarist" })
        );
    }
}
