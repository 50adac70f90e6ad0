//! Album catalog

use crate::clock::{Clock, SystemClock};
use crate::error::{CatalogError, Result};
use crate::types::{Album, AlbumInput};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

const ENTITY: &str = "Album";

/// In-memory album collection keyed by album name
///
/// Records keep insertion order. Create appends, update replaces in place,
/// nothing is ever removed.
pub struct AlbumCatalog {
    albums: RwLock<Vec<Album>>,
    clock: Arc<dyn Clock>,
}

impl AlbumCatalog {
    /// Create an empty catalog stamping release dates from the wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty catalog stamping release dates from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            albums: RwLock::new(Vec::new()),
            clock,
        }
    }

    // Mutations are all-or-nothing, so a poisoned lock still guards a
    // consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Album>> {
        self.albums.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Album>> {
        self.albums.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All albums in insertion order
    pub fn list(&self) -> Vec<Album> {
        self.read().clone()
    }

    /// Number of stored albums
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the catalog holds no albums
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Album with exactly this name
    pub fn get(&self, album_name: &str) -> Option<Album> {
        self.read()
            .iter()
            .find(|album| album.album_name == album_name)
            .cloned()
    }

    /// Validate and append a new album
    ///
    /// Any release date on the candidate is replaced with the current time.
    ///
    /// # Errors
    /// - `InvalidAlbum` if the name is too short or the price out of range
    /// - `Conflict` if another album already has this name
    pub fn create(&self, input: AlbumInput) -> Result<Album> {
        let mut albums = self.write();

        input.validate()?;
        if albums.iter().any(|album| album.album_name == input.album_name) {
            return Err(CatalogError::conflict(ENTITY, input.album_name));
        }

        let album = Album::from_input(input, self.clock.now());
        albums.push(album.clone());

        debug!(
            album = %album.album_name,
            release_date = %album.release_date,
            "Album created"
        );
        Ok(album)
    }

    /// Replace every field of the album named `album_name` except its release date
    ///
    /// The candidate may rename the album as long as the new name is not
    /// held by a different album.
    ///
    /// # Errors
    /// - `NotFound` if no album has this name
    /// - `InvalidAlbum` if the candidate fails the create rules
    /// - `Conflict` if the new name belongs to another album
    pub fn update(&self, album_name: &str, input: AlbumInput) -> Result<Album> {
        let mut albums = self.write();

        let index = albums
            .iter()
            .position(|album| album.album_name == album_name)
            .ok_or_else(|| CatalogError::not_found(ENTITY, album_name))?;

        input.validate()?;

        let taken = albums
            .iter()
            .enumerate()
            .any(|(i, album)| i != index && album.album_name == input.album_name);
        if taken {
            return Err(CatalogError::conflict(ENTITY, input.album_name));
        }

        let updated = Album::from_input(input, albums[index].release_date);
        albums[index] = updated.clone();

        debug!(album = %album_name, new_name = %updated.album_name, "Album updated");
        Ok(updated)
    }

    /// All albums ordered by release date, oldest first
    ///
    /// Equal dates keep their insertion order.
    pub fn list_sorted_by_release_date(&self) -> Vec<Album> {
        let mut albums = self.list();
        albums.sort_by_key(|album| album.release_date);
        albums
    }

    /// Albums crediting `musician`, cheapest first
    ///
    /// Equal prices keep their insertion order. No match yields an empty list.
    pub fn list_for_musician_sorted_by_price(&self, musician: &str) -> Vec<Album> {
        let mut albums: Vec<Album> = self
            .read()
            .iter()
            .filter(|album| album.features(musician))
            .cloned()
            .collect();
        albums.sort_by_key(|album| album.price);
        albums
    }
}

impl Default for AlbumCatalog {
    fn default() -> Self {
        Self::new()
    }
}
