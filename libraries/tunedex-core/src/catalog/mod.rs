//! In-memory catalogs
//!
//! Each catalog owns its collection behind an `RwLock`. Operations never
//! block on I/O, so callers share catalogs as `Arc` handles and call them
//! directly from async handlers.

mod albums;
mod musicians;

pub use albums::AlbumCatalog;
pub use musicians::MusicianCatalog;
