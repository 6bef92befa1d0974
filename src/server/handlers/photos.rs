//! Photo upload handler.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use image::ImageFormat;
use serde::Serialize;
use serde_json::{Value, json};
use std::io::Cursor;

use crate::capture::encode_data_url;
use crate::layout::SLOT_COUNT;
use crate::store::SessionUpdate;

use super::super::state::AppState;
use super::not_found;

/// Response from the photo upload endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub session_id: String,
    pub photo_count: usize,
    pub width: u32,
    pub height: u32,
}

/// POST /api/photo-sessions/:session_id/photos - Append a captured photo.
///
/// Accepts a multipart `photo` field, validates that it decodes, re-encodes
/// it as a PNG data URL, and appends it to the session's photo list. A
/// session already holding four photos rejects the upload.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, Json<Value>)> {
    let mut photo_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": format!("Multipart error: {}", e) })),
        )
    })? {
        if field.name().unwrap_or("") == "photo" {
            let bytes = field.bytes().await.map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": format!("Failed to read photo: {}", e) })),
                )
            })?;
            photo_data = Some(bytes.to_vec());
            break;
        }
    }

    let photo_bytes = photo_data.ok_or((
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "No photo field found" })),
    ))?;

    let record = state.store.get(&session_id).await.ok_or_else(not_found)?;
    if record.photos.len() >= SLOT_COUNT {
        return Err((
            StatusCode::CONFLICT,
            Json(json!({ "message": format!("Session already holds {} photos", SLOT_COUNT) })),
        ));
    }

    // Decode and normalize to PNG on the blocking pool
    let (data_url, width, height) = tokio::task::spawn_blocking(move || {
        let img = image::load_from_memory(&photo_bytes)
            .map_err(|e| format!("Failed to decode photo: {}", e))?;
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| format!("Failed to encode photo: {}", e))?;
        Ok::<_, String>((encode_data_url(buf.get_ref()), img.width(), img.height()))
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": format!("Task error: {}", e) })),
        )
    })?
    .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "message": e }))))?;

    let mut photos = record.photos;
    photos.push(data_url);
    let photo_count = photos.len();

    let updates = SessionUpdate {
        photos: Some(photos),
        ..Default::default()
    };
    state
        .store
        .update(&session_id, updates)
        .await
        .ok_or_else(not_found)?;

    println!(
        "[photo] appended {}x{} frame to {} ({}/{})",
        width, height, session_id, photo_count, SLOT_COUNT
    );

    Ok(Json(UploadResponse {
        session_id,
        photo_count,
        width,
        height,
    }))
}
