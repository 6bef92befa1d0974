//! Session CRUD handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::layout::SLOT_COUNT;
use crate::store::{NewSession, SessionRecord, SessionUpdate};

use super::super::state::AppState;
use super::not_found;

/// POST /api/photo-sessions - Create a photo session.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewSession>,
) -> Result<Json<SessionRecord>, (StatusCode, Json<Value>)> {
    if body.photos.len() > SLOT_COUNT {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": format!("A session holds at most {} photos", SLOT_COUNT) })),
        ));
    }

    let record = state.store.create(body).await;
    println!("[session] created {}", record.session_id);
    Ok(Json(record))
}

/// GET /api/photo-sessions/:session_id - Fetch a photo session.
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionRecord>, (StatusCode, Json<Value>)> {
    let record = state.store.get(&session_id).await.ok_or_else(not_found)?;
    Ok(Json(record))
}

/// PATCH /api/photo-sessions/:session_id - Update a photo session.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(updates): Json<SessionUpdate>,
) -> Result<Json<SessionRecord>, (StatusCode, Json<Value>)> {
    if let Some(photos) = &updates.photos {
        if photos.len() > SLOT_COUNT {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": format!("A session holds at most {} photos", SLOT_COUNT) })),
            ));
        }
    }

    let record = state
        .store
        .update(&session_id, updates)
        .await
        .ok_or_else(not_found)?;
    Ok(Json(record))
}

/// DELETE /api/photo-sessions/:session_id - Delete a photo session.
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !state.store.delete(&session_id).await {
        return Err(not_found());
    }
    println!("[session] deleted {}", session_id);
    Ok(Json(json!({ "message": "Session deleted successfully" })))
}
