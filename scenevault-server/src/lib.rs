//! Development document server for SceneVault.
//!
//! Serves the generic HTTP document API the `http` store backend talks to:
//! - `GET {prefix}/{id}`: 200 `{ "id", "data" }`, or 404
//! - `POST {prefix}`: create from `{ "id", "data" }`, 201, or 409 if the room exists
//! - `PUT {prefix}/{id}`: replace, 200, or 404 if the room does not exist
//!
//! Records are kept in any [`SceneStore`], in memory by default. The server
//! never sees keys or plaintext; it stores whatever the clients encrypted.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use scenevault_store::{SceneDocument, SceneStore, StoreError, StoredScene};
use scenevault_types::RoomId;
use serde_json::json;
use tracing::{debug, warn};

/// Default mount point, matching what the web client proxies to.
pub const DEFAULT_PREFIX: &str = "/whiteboards";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn SceneStore>,
}

impl AppState {
    /// Wraps a store.
    pub fn new(store: Arc<dyn SceneStore>) -> Self {
        Self { store }
    }
}

/// Errors returned by the document API.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound,
    Conflict,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "document not found".to_string()),
            ApiError::Conflict => (StatusCode::CONFLICT, "document already exists".to_string()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => ApiError::Conflict,
            e if e.is_not_found() => ApiError::NotFound,
            e => {
                warn!(error = %e, "store failure");
                ApiError::Internal(e.to_string())
            }
        }
    }
}

fn parse_room(id: &str) -> Result<RoomId, ApiError> {
    RoomId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn document_payload(document: SceneDocument) -> Result<(RoomId, StoredScene), ApiError> {
    let room = parse_room(&document.id)?;
    let data = document
        .data
        .ok_or_else(|| ApiError::BadRequest("document data is missing".to_string()))?;
    Ok((room, data))
}

async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SceneDocument>, ApiError> {
    let room = parse_room(&id)?;
    let data = state.store.get(&room).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(SceneDocument::new(id, data)))
}

async fn create_document(
    State(state): State<AppState>,
    Json(document): Json<SceneDocument>,
) -> Result<(StatusCode, Json<SceneDocument>), ApiError> {
    let (room, data) = document_payload(document)?;
    state.store.create(&room, &data).await?;
    debug!(room = %room, version = data.scene_version, "document created");
    Ok((StatusCode::CREATED, Json(SceneDocument::new(room, data))))
}

async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(document): Json<SceneDocument>,
) -> Result<Json<SceneDocument>, ApiError> {
    if document.id != id {
        return Err(ApiError::BadRequest(format!(
            "document id {:?} does not match path id {id:?}",
            document.id
        )));
    }
    let (room, data) = document_payload(document)?;
    state.store.update(&room, &data).await?;
    debug!(room = %room, version = data.scene_version, "document updated");
    Ok(Json(SceneDocument::new(room, data)))
}

/// Build the document API router, mounted under `prefix`.
///
/// An empty prefix or `/` mounts the API at the root.
pub fn build_router(store: Arc<dyn SceneStore>, prefix: &str) -> Router {
    let api = Router::new()
        .route("/", post(create_document))
        .route("/{id}", get(get_document).put(update_document))
        .with_state(AppState::new(store));

    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        api
    } else if prefix.starts_with('/') {
        Router::new().nest(prefix, api)
    } else {
        Router::new().nest(&format!("/{prefix}"), api)
    }
}
