/// Albums API routes
use crate::{error::Result, extract::Payload, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tunedex_core::{Album, AlbumInput};

/// GET /api/albums
/// All albums in insertion order
pub async fn list_albums(State(app_state): State<AppState>) -> Json<Vec<Album>> {
    Json(app_state.albums.list())
}

/// POST /api/albums
/// Create an album; the release date is assigned by the server
pub async fn create_album(
    State(app_state): State<AppState>,
    Payload(input): Payload<AlbumInput>,
) -> Result<(StatusCode, Json<Album>)> {
    let album = app_state.albums.create(input)?;
    tracing::info!("Created album {}", album.album_name);
    Ok((StatusCode::CREATED, Json(album)))
}

/// PUT /api/albums/:album_name
/// Replace an album, keeping its release date
pub async fn update_album(
    Path(album_name): Path<String>,
    State(app_state): State<AppState>,
    Payload(input): Payload<AlbumInput>,
) -> Result<Json<Album>> {
    let album = app_state.albums.update(&album_name, input)?;
    tracing::info!("Updated album {}", album_name);
    Ok(Json(album))
}

/// GET /api/albums-by-release-date
pub async fn list_albums_by_release_date(State(app_state): State<AppState>) -> Json<Vec<Album>> {
    Json(app_state.albums.list_sorted_by_release_date())
}

/// GET /api/albums/:album_name/musicians
/// Musician names credited on the album, sorted; unknown albums give `[]`
pub async fn list_album_musicians(
    Path(album_name): Path<String>,
    State(app_state): State<AppState>,
) -> Json<Vec<String>> {
    Json(app_state.musicians.musicians_of_album(&album_name))
}
