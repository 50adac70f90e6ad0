//! Musician catalog

use super::AlbumCatalog;
use crate::error::{CatalogError, Result};
use crate::types::Musician;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

const ENTITY: &str = "Musician";

/// In-memory musician collection keyed by name
///
/// Holds a handle to the album catalog for the album-to-musicians view.
/// Album credits are free-form, so a musician listed on an album need not
/// exist here.
pub struct MusicianCatalog {
    musicians: RwLock<Vec<Musician>>,
    albums: Arc<AlbumCatalog>,
}

impl MusicianCatalog {
    /// Create an empty catalog reading album credits from `albums`
    pub fn new(albums: Arc<AlbumCatalog>) -> Self {
        Self {
            musicians: RwLock::new(Vec::new()),
            albums,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Musician>> {
        self.musicians.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Musician>> {
        self.musicians.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All musicians in insertion order
    pub fn list(&self) -> Vec<Musician> {
        self.read().clone()
    }

    /// Number of stored musicians
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the catalog holds no musicians
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Validate and append a new musician
    ///
    /// # Errors
    /// - `InvalidMusician` if the name is too short
    /// - `Conflict` if the name is already taken
    pub fn create(&self, musician: Musician) -> Result<Musician> {
        let mut musicians = self.write();

        musician.validate()?;
        if musicians.iter().any(|m| m.name == musician.name) {
            return Err(CatalogError::conflict(ENTITY, musician.name));
        }

        musicians.push(musician.clone());
        debug!(musician = %musician.name, "Musician created");
        Ok(musician)
    }

    /// Replace the musician named `musician_name` wholesale
    ///
    /// Applies the same name rule as `create`; renaming onto a name held by
    /// another musician is refused.
    ///
    /// # Errors
    /// - `NotFound` if no musician has this name
    /// - `InvalidMusician` if the candidate name is too short
    /// - `Conflict` if the new name belongs to another musician
    pub fn update(&self, musician_name: &str, musician: Musician) -> Result<Musician> {
        let mut musicians = self.write();

        let index = musicians
            .iter()
            .position(|m| m.name == musician_name)
            .ok_or_else(|| CatalogError::not_found(ENTITY, musician_name))?;

        musician.validate()?;

        let taken = musicians
            .iter()
            .enumerate()
            .any(|(i, m)| i != index && m.name == musician.name);
        if taken {
            return Err(CatalogError::conflict(ENTITY, musician.name));
        }

        musicians[index] = musician.clone();
        debug!(musician = %musician_name, new_name = %musician.name, "Musician updated");
        Ok(musician)
    }

    /// Musicians credited on `album_name`, sorted by name
    ///
    /// Unknown albums yield an empty list. The stored credit order is left
    /// as the client supplied it.
    pub fn musicians_of_album(&self, album_name: &str) -> Vec<String> {
        let Some(album) = self.albums.get(album_name) else {
            return Vec::new();
        };

        let mut names = album.musicians;
        names.sort();
        names
    }
}
