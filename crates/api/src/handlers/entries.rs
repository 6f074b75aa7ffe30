//! Handlers for the entry catalog.
//!
//! The confirmation bodies of create and delete differ by backend: the
//! in-memory store reports the full post-mutation collection and the
//! relational store does not, so those handlers shape their response from
//! the snapshot the store returned.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use catalog_core::entry::{CreateEntry, Entry, UpdateEntry};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /entries
///
/// List all entries in store order.
pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<Vec<Entry>>> {
    let entries = state.store.list().await?;

    Ok(Json(entries))
}

/// GET /entries/{id}
///
/// Retrieve a single entry by id.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Entry>> {
    let entry = state.store.get(&id).await?;

    Ok(Json(entry))
}

/// POST /entries
///
/// Create a new entry. Answers 201 with either the updated collection
/// (in-memory backend) or a confirmation message (relational backend).
pub async fn create_entry(
    State(state): State<AppState>,
    body: Result<Json<CreateEntry>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let snapshot = state.store.create(input).await?;

    tracing::info!("Entry created");

    let response = match snapshot {
        Some(entries) => (StatusCode::CREATED, Json(json!(entries))),
        None => (
            StatusCode::CREATED,
            Json(json!({ "message": "Entry added successfully" })),
        ),
    };

    Ok(response)
}

/// PUT /entries/{id}
///
/// Fully replace an entry's title, author, and rating.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateEntry>, JsonRejection>,
) -> AppResult<Json<Entry>> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let entry = state.store.update(&id, input).await?;

    tracing::info!(id = %entry.id, "Entry updated");

    Ok(Json(entry))
}

/// DELETE /entries/{id}
///
/// Remove an entry. Answers 200 with a confirmation message, plus the
/// resulting collection when the backend reports one.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state.store.delete(&id).await?;

    tracing::info!(%id, "Entry deleted");

    let body = match snapshot {
        Some(entries) => json!({
            "message": "Entry deleted successfully",
            "entries": entries,
        }),
        None => json!({ "message": "Entry deleted successfully" }),
    };

    Ok(Json(body))
}
