/// Musicians API routes
use crate::{error::Result, extract::Payload, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tunedex_core::{Album, Musician};

/// GET /api/musicians
pub async fn list_musicians(State(app_state): State<AppState>) -> Json<Vec<Musician>> {
    Json(app_state.musicians.list())
}

/// POST /api/musicians
pub async fn create_musician(
    State(app_state): State<AppState>,
    Payload(musician): Payload<Musician>,
) -> Result<(StatusCode, Json<Musician>)> {
    let musician = app_state.musicians.create(musician)?;
    tracing::info!("Created musician {}", musician.name);
    Ok((StatusCode::CREATED, Json(musician)))
}

/// PUT /api/musicians/:musician_name
/// Replace a musician wholesale
pub async fn update_musician(
    Path(musician_name): Path<String>,
    State(app_state): State<AppState>,
    Payload(musician): Payload<Musician>,
) -> Result<Json<Musician>> {
    let musician = app_state.musicians.update(&musician_name, musician)?;
    tracing::info!("Updated musician {}", musician_name);
    Ok(Json(musician))
}

/// GET /api/musicians/:musician_name/albums
/// Albums crediting the musician, cheapest first; no match gives `[]`
pub async fn list_musician_albums(
    Path(musician_name): Path<String>,
    State(app_state): State<AppState>,
) -> Json<Vec<Album>> {
    Json(app_state.albums.list_for_musician_sorted_by_price(&musician_name))
}
