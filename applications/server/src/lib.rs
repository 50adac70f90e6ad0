//! Tunedex Server Library
//!
//! HTTP front end for the in-memory album and musician catalogs.
//!
//! This library exposes the router and its components for testing purposes.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ServerConfig, ServerSettings};
pub use error::{Result, ServerError};
pub use state::AppState;

/// Build the application router, all catalog routes nested under `/api`
pub fn create_router(app_state: AppState, settings: &ServerSettings) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Albums
        .route("/albums", get(api::albums::list_albums))
        .route("/albums", post(api::albums::create_album))
        // `/albums/:album_name` owns every segment under `/albums/`
        .route(
            "/albums-by-release-date",
            get(api::albums::list_albums_by_release_date),
        )
        .route("/albums/:album_name", put(api::albums::update_album))
        .route(
            "/albums/:album_name/musicians",
            get(api::albums::list_album_musicians),
        )
        // Musicians
        .route("/musicians", get(api::musicians::list_musicians))
        .route("/musicians", post(api::musicians::create_musician))
        .route(
            "/musicians/:musician_name",
            put(api::musicians::update_musician),
        )
        .route(
            "/musicians/:musician_name/albums",
            get(api::musicians::list_musician_albums),
        );

    let router = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()));

    let router = if settings.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(app_state)
}
