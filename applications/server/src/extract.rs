/// Request extractors
use crate::error::ServerError;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body extractor that rejects with `ServerError::BadRequest`
///
/// Axum's own `Json` answers 415/422 for some failures; every malformed
/// payload here becomes a 400 with the usual error body.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            ServerError::BadRequest(rejection.body_text())
        })?;
        Ok(Self(value))
    }
}
