// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sheetrow_kernel::error::KernelError;
use sheetrow_kernel::types::Field;
use thiserror::Error;

use crate::api::StatusResponse;

/// Anything that went wrong talking to the spreadsheet service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("sheets request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sheets api returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to load credentials from {path:?}: {reason}")]
    Credentials { path: PathBuf, reason: String },
    #[error("failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("token exchange rejected: {0}")]
    TokenExchange(String),
    #[error("invalid sheets api url: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] UpstreamError),
    #[error("no record named {0:?}")]
    NotFound(String),
    #[error("missing required field `{0}`")]
    ValidationFailed(Field),
}

impl StoreError {
    /// Lifts a kernel failure, attaching the key that was looked up.
    pub fn from_kernel(err: KernelError, key: &str) -> Self {
        match err {
            KernelError::NotFound => StoreError::NotFound(key.to_string()),
            KernelError::MissingField(field) => StoreError::ValidationFailed(field),
        }
    }
}

/// The five record endpoints. Each maps store failures to the wire its own way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Replace,
    Patch,
    Delete,
}

impl Route {
    fn verb(&self) -> &'static str {
        match self {
            Route::List => "GET",
            Route::Create => "POST",
            Route::Replace => "PUT",
            Route::Patch => "PATCH",
            Route::Delete => "DELETE",
        }
    }
}

pub const NO_MATCH: &str = "No match found";
pub const FILL_ALL_BLANKS: &str = "Please fill all blanks!";
pub const POST_FAILED: &str = "Error on post";
pub const DELETE_FAILED: &str = "Error on DELETE";

#[derive(Error, Debug)]
#[error("{} failed: {error}", .route.verb())]
pub struct RouteError {
    pub route: Route,
    pub error: StoreError,
}

impl RouteError {
    pub fn new(route: Route, error: StoreError) -> Self {
        Self { route, error }
    }
}

fn status(message: impl Into<String>) -> Response {
    Json(StatusResponse::new(message)).into_response()
}

fn server_error(route: Route) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("error on {}", route.verb()),
    )
        .into_response()
}

// POST and DELETE answer 200 even on upstream failure; clients key off `status`.
impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        match &self.error {
            StoreError::UpstreamUnavailable(e) => {
                tracing::error!("{} /api upstream failure: {}", self.route.verb(), e)
            }
            other => tracing::info!("{} /api rejected: {}", self.route.verb(), other),
        }

        match (self.route, self.error) {
            (Route::Create, _) => status(POST_FAILED),
            (Route::Delete, StoreError::NotFound(key)) => status(format!("{}{}", NO_MATCH, key)),
            (Route::Delete, _) => status(DELETE_FAILED),
            (route, StoreError::UpstreamUnavailable(_)) => server_error(route),
            (_, StoreError::NotFound(_)) => status(NO_MATCH),
            (_, StoreError::ValidationFailed(_)) => status(FILL_ALL_BLANKS),
        }
    }
}
