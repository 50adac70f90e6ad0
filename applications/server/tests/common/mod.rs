/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;
use tunedex_core::test_utils::FixedClock;
use tunedex_core::{AlbumCatalog, MusicianCatalog};
use tunedex_server::{create_router, AppState, ServerSettings};

/// Router over fresh catalogs whose release dates come from the returned clock
pub fn create_test_app() -> (Router, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(fixtures::date(2024)));
    let albums = Arc::new(AlbumCatalog::with_clock(clock.clone()));
    let musicians = Arc::new(MusicianCatalog::new(Arc::clone(&albums)));
    let app = create_router(AppState::new(albums, musicians), &ServerSettings::default());
    (app, clock)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send a request and decode the JSON body (Null when the body is empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request("POST", uri, &body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request("PUT", uri, &body)).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, get_request(uri)).await
}

pub fn release_date(album: &Value) -> DateTime<Utc> {
    serde_json::from_value(album["releaseDate"].clone()).unwrap()
}

pub fn names(albums: &Value) -> Vec<String> {
    albums
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["albumName"].as_str().unwrap().to_string())
        .collect()
}

/// Test payloads
pub mod fixtures {
    use super::*;
    use serde_json::json;

    pub fn date(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    pub fn album(name: &str, price: i64, musicians: &[&str]) -> Value {
        json!({
            "albumName": name,
            "genre": "Jazz",
            "price": price,
            "description": "Test album",
            "musicians": musicians,
        })
    }

    pub fn musician(name: &str, musician_type: &str) -> Value {
        json!({ "name": name, "musicianType": musician_type })
    }
}
