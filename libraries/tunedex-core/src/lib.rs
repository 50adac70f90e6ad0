//! Tunedex Core
//!
//! In-memory album and musician catalogs with the validation, update and
//! derived-view rules of the Tunedex service.
//!
//! This crate has no HTTP or async runtime dependency; the server wraps the
//! catalogs in `Arc` handles and calls into them from request handlers.
//!
//! # Architecture
//!
//! - **Domain Types**: `Album`, `AlbumInput`, `Musician`
//! - **Catalogs**: `AlbumCatalog`, `MusicianCatalog` (the latter reads the former)
//! - **Clock**: `Clock` trait stamping album release dates
//! - **Test Utilities**: `test_utils::FixedClock` (feature `test-utils`)
//! - **Error Handling**: `CatalogError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tunedex_core::{AlbumCatalog, AlbumInput, Musician, MusicianCatalog};
//!
//! let albums = Arc::new(AlbumCatalog::new());
//! let musicians = MusicianCatalog::new(Arc::clone(&albums));
//!
//! let mut input = AlbumInput::new("Blue Train", 450);
//! input.musicians = vec!["Lee Morgan".to_string(), "John Coltrane".to_string()];
//! albums.create(input).unwrap();
//!
//! musicians.create(Musician::new("John Coltrane", "Saxophonist")).unwrap();
//!
//! assert_eq!(
//!     musicians.musicians_of_album("Blue Train"),
//!     vec!["John Coltrane".to_string(), "Lee Morgan".to_string()]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod clock;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use catalog::{AlbumCatalog, MusicianCatalog};
pub use clock::{Clock, SystemClock};
pub use error::{AlbumViolation, CatalogError, MusicianViolation, Result};
pub use types::{Album, AlbumInput, Musician};
