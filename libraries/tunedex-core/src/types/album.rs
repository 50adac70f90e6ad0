//! Album types

use crate::error::AlbumViolation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shortest accepted album name, in characters
pub const MIN_ALBUM_NAME_LEN: usize = 5;

/// Lowest accepted album price
pub const MIN_PRICE: i64 = 100;

/// Highest accepted album price
pub const MAX_PRICE: i64 = 1000;

/// A stored album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Unique album name
    pub album_name: String,

    /// Assigned by the catalog at creation, never changed afterwards
    pub release_date: DateTime<Utc>,

    /// Genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Price in whole currency units
    pub price: i64,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Musician names in the order the client supplied them
    #[serde(default)]
    pub musicians: Vec<String>,
}

impl Album {
    /// Build a stored album from a candidate and the release date to keep
    pub fn from_input(input: AlbumInput, release_date: DateTime<Utc>) -> Self {
        Self {
            album_name: input.album_name,
            release_date,
            genre: input.genre,
            price: input.price,
            description: input.description,
            musicians: input.musicians,
        }
    }

    /// Whether `musician` is credited on this album (exact match)
    pub fn features(&self, musician: &str) -> bool {
        self.musicians.iter().any(|name| name == musician)
    }
}

/// Album candidate for create and full-record update
///
/// `release_date` is accepted so clients can round-trip a stored album, but
/// the catalog always discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInput {
    /// Requested album name
    pub album_name: String,

    /// Ignored by the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,

    /// Genre
    #[serde(default)]
    pub genre: Option<String>,

    /// Requested price
    pub price: i64,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Musician names, order preserved
    #[serde(default)]
    pub musicians: Vec<String>,
}

impl AlbumInput {
    /// Create a candidate with only the required fields set
    pub fn new(album_name: impl Into<String>, price: i64) -> Self {
        Self {
            album_name: album_name.into(),
            release_date: None,
            genre: None,
            price,
            description: None,
            musicians: Vec::new(),
        }
    }

    /// Check name length and price range
    ///
    /// # Errors
    /// Returns the first rule the candidate breaks, name before price
    pub fn validate(&self) -> std::result::Result<(), AlbumViolation> {
        let name_len = self.album_name.chars().count();
        if name_len < MIN_ALBUM_NAME_LEN {
            return Err(AlbumViolation::NameTooShort {
                min: MIN_ALBUM_NAME_LEN,
                actual: name_len,
            });
        }

        if !(MIN_PRICE..=MAX_PRICE).contains(&self.price) {
            return Err(AlbumViolation::PriceOutOfRange {
                min: MIN_PRICE,
                max: MAX_PRICE,
                actual: self.price,
            });
        }

        Ok(())
    }
}

impl From<Album> for AlbumInput {
    fn from(album: Album) -> Self {
        Self {
            album_name: album.album_name,
            release_date: Some(album.release_date),
            genre: album.genre,
            price: album.price,
            description: album.description,
            musicians: album.musicians,
        }
    }
}
