//! Layout rendering handler.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::capture::CapturedImage;
use crate::compose::compose;
use crate::error::PawtoboothError;
use crate::layout::{BackgroundColor, PrintFormat, SLOT_COUNT};

use super::super::state::AppState;
use super::{error_response, not_found};

/// Decode plus render must finish inside this window; the booth UI treats a
/// slower render as failed and lets the user retry.
const RENDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters for the layout endpoint.
///
/// Both override the stored session settings when present.
#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    pub format: Option<PrintFormat>,
    pub background: Option<BackgroundColor>,
}

/// GET /api/photo-sessions/:session_id/layout - Render the print layout.
///
/// Responds with the composed PNG at the format's canonical dimensions.
/// Sessions holding fewer than four photos are rejected; composing is pure,
/// so the client may retry the same request after any failure.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Query(query): Query<LayoutQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let record = state.store.get(&session_id).await.ok_or_else(not_found)?;

    if record.photos.len() != SLOT_COUNT {
        return Err(error_response(&PawtoboothError::InvalidInputCount(
            record.photos.len(),
        )));
    }

    let photos = record
        .photos
        .iter()
        .map(|url| CapturedImage::from_data_url(url))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| error_response(&e))?;

    let format = query.format.unwrap_or(record.print_format);
    let background = query.background.unwrap_or(record.background_color);

    // Decode and render on the blocking pool, bounded by the hard timeout
    let render_task = tokio::task::spawn_blocking(move || compose(&photos, format, background));
    let composed = tokio::time::timeout(RENDER_TIMEOUT, render_task)
        .await
        .map_err(|_| error_response(&PawtoboothError::DecodeTimeout))?
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": format!("Task error: {}", e) })),
            )
        })?
        .map_err(|e| error_response(&e))?;

    println!(
        "[layout] composed {} {}x{} for {}",
        format.tag(),
        composed.width,
        composed.height,
        session_id
    );

    Ok(([(header::CONTENT_TYPE, "image/png")], composed.png))
}
