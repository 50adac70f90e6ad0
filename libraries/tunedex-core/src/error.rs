/// Core error types for Tunedex
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Album field rule that a candidate broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlbumViolation {
    /// Album name shorter than the minimum
    #[error("album name must be at least {min} characters (got {actual})")]
    NameTooShort {
        /// Minimum accepted length
        min: usize,
        /// Length of the rejected name
        actual: usize,
    },

    /// Price outside the accepted range
    #[error("price must be between {min} and {max} (got {actual})")]
    PriceOutOfRange {
        /// Lowest accepted price
        min: i64,
        /// Highest accepted price
        max: i64,
        /// Rejected price
        actual: i64,
    },
}

/// Musician field rule that a candidate broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MusicianViolation {
    /// Musician name shorter than the minimum
    #[error("musician name must be at least {min} characters (got {actual})")]
    NameTooShort {
        /// Minimum accepted length
        min: usize,
        /// Length of the rejected name
        actual: usize,
    },
}

/// Core error type for catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Album candidate failed validation
    #[error("Invalid album: {0}")]
    InvalidAlbum(#[from] AlbumViolation),

    /// Musician candidate failed validation
    #[error("Invalid musician: {0}")]
    InvalidMusician(#[from] MusicianViolation),

    /// No record with the given key
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Kind of record looked up
        entity: &'static str,
        /// Key that matched nothing
        key: String,
    },

    /// Key already held by a different record
    #[error("{entity} already exists: {key}")]
    Conflict {
        /// Kind of record
        entity: &'static str,
        /// Contested key
        key: String,
    },
}

impl CatalogError {
    /// Create a not found error
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(entity: &'static str, key: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            key: key.into(),
        }
    }
}
