use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

const MAX_BODY_SIZE: usize = 1024 * 1024;

/// JSON body extractor that tolerates a missing body or content type and reports
/// malformed input as a JSON error.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(request: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let body_bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Failed to read request body");
                AppError::InvalidBody
            })?;

        parse_body(&body_bytes).map(JsonBody)
    }
}

/// `Path` whose rejection renders as a JSON error.
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| PathParam(value))
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Rejected path parameters");
                AppError::InvalidPath
            })
    }
}

/// `Query` whose rejection renders as a JSON error.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| QueryParams(value))
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Rejected query string");
                AppError::InvalidQuery
            })
    }
}

fn parse_body<T: DeserializeOwned>(body_bytes: &[u8]) -> Result<T, AppError> {
    let source: &[u8] = if body_bytes.trim_ascii().is_empty() {
        b"{}"
    } else {
        body_bytes
    };

    serde_json::from_slice(source).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::InvalidBody
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::{Map, Value};

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: Option<String>,
    }

    #[test]
    fn empty_body_reads_as_empty_object() {
        let sample: Sample = parse_body(b"").unwrap();
        assert!(sample.name.is_none());

        let map: Map<String, Value> = parse_body(b"  \n").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn malformed_body_is_rejected() {
        assert!(matches!(
            parse_body::<Sample>(b"{name:"),
            Err(AppError::InvalidBody)
        ));
        assert!(matches!(
            parse_body::<Sample>(br#"{"name": 7}"#),
            Err(AppError::InvalidBody)
        ));
    }
}
