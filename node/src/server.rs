// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, State},
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue},
    routing::{get, put},
    Json, Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeader;
use tower_http::trace::TraceLayer;

use crate::api::{ListResponse, RecordFields, StatusResponse};
use crate::errors::{Route, RouteError};
use crate::extract::JsonOrForm;
use crate::network::{SheetsApi, SheetsClient};
use crate::store::RecordStore;

pub type ConcreteStore = RecordStore<SheetsClient>;
pub type SharedStore<S> = Arc<RecordStore<S>>;

pub const INDEX_FILE: &str = "index.html";

pub fn build_router<S>(store: SharedStore<S>, public_dir: impl AsRef<Path>) -> Router
where
    S: SheetsApi + 'static,
{
    let public_dir = public_dir.as_ref();
    let index = SetResponseHeader::overriding(
        ServeFile::new(public_dir.join(INDEX_FILE)),
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    Router::new()
        .route("/api", get(list_records::<S>).post(create_record::<S>))
        // PUT/PATCH take the key as `value`, DELETE as `name`; one pattern serves both
        .route(
            "/api/name/:value",
            put(replace_record::<S>)
                .patch(patch_record::<S>)
                .delete(delete_record::<S>),
        )
        .route("/metrics", get(metrics_handler))
        .with_state(store)
        .route_service("/", index)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
}

async fn list_records<S: SheetsApi>(
    State(store): State<SharedStore<S>>,
) -> Result<Json<ListResponse>, RouteError> {
    let records = store
        .list()
        .await
        .map_err(|e| RouteError::new(Route::List, e))?;
    Ok(Json(records))
}

async fn create_record<S: SheetsApi>(
    State(store): State<SharedStore<S>>,
    JsonOrForm(fields): JsonOrForm<RecordFields>,
) -> Result<Json<StatusResponse>, RouteError> {
    store
        .append(fields.into_record_lenient())
        .await
        .map_err(|e| RouteError::new(Route::Create, e))?;
    Ok(Json(StatusResponse::success()))
}

async fn replace_record<S: SheetsApi>(
    State(store): State<SharedStore<S>>,
    UrlPath(value): UrlPath<String>,
    JsonOrForm(fields): JsonOrForm<RecordFields>,
) -> Result<Json<StatusResponse>, RouteError> {
    store
        .replace(&value, fields)
        .await
        .map_err(|e| RouteError::new(Route::Replace, e))?;
    Ok(Json(StatusResponse::success()))
}

async fn patch_record<S: SheetsApi>(
    State(store): State<SharedStore<S>>,
    UrlPath(value): UrlPath<String>,
    JsonOrForm(fields): JsonOrForm<RecordFields>,
) -> Result<Json<StatusResponse>, RouteError> {
    store
        .patch(&value, fields)
        .await
        .map_err(|e| RouteError::new(Route::Patch, e))?;
    Ok(Json(StatusResponse::success()))
}

async fn delete_record<S: SheetsApi>(
    State(store): State<SharedStore<S>>,
    UrlPath(name): UrlPath<String>,
) -> Result<Json<StatusResponse>, RouteError> {
    store
        .delete_by_name(&name)
        .await
        .map_err(|e| RouteError::new(Route::Delete, e))?;
    Ok(Json(StatusResponse::success()))
}

async fn metrics_handler() -> String {
    crate::telemetry::render_metrics()
}
