/// Shared application state
use std::sync::Arc;
use tunedex_core::{AlbumCatalog, MusicianCatalog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<AlbumCatalog>,
    pub musicians: Arc<MusicianCatalog>,
}

impl AppState {
    pub fn new(albums: Arc<AlbumCatalog>, musicians: Arc<MusicianCatalog>) -> Self {
        Self { albums, musicians }
    }

    /// Empty catalogs wired together, album catalog on the wall clock
    pub fn in_memory() -> Self {
        let albums = Arc::new(AlbumCatalog::new());
        let musicians = Arc::new(MusicianCatalog::new(Arc::clone(&albums)));
        Self::new(albums, musicians)
    }
}
