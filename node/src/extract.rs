// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

/// Request body that may arrive as JSON or as an urlencoded form.
///
/// Bodies with any other content type, and empty JSON bodies, yield
/// `T::default()`, so absent fields simply read as missing.
#[derive(Debug, Clone, Default)]
pub struct JsonOrForm<T>(pub T);

fn is_json(content_type: &str) -> bool {
    content_type.starts_with("application/json") || content_type.contains("+json")
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(value));
        }

        if is_json(&content_type) {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Self(T::default()));
            }
            let Json(value) = Json::<T>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
            return Ok(Self(value));
        }

        Ok(Self(T::default()))
    }
}
