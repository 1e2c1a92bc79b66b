//! Axum route handlers for saved pages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::composition::handlers::SessionResponse;
use crate::composition::Composition;
use crate::errors::AppError;
use crate::generation::generate;
use crate::saves::{SavePayload, SaveSummary, SavedEntry};
use crate::sessions::{read_session, with_session};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// What a save captures from its session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveKind {
    /// The full snapshot; can be loaded back into a session.
    #[default]
    Composition,
    /// Only the generated source text.
    Source,
}

#[derive(Debug, Deserialize)]
pub struct CreateSaveRequest {
    pub name: String,
    #[serde(default)]
    pub kind: SaveKind,
}

#[derive(Debug, Deserialize)]
pub struct OverwriteSaveRequest {
    pub session_id: Uuid,
    #[serde(default)]
    pub kind: SaveKind,
}

#[derive(Debug, Serialize)]
pub struct SaveListResponse {
    pub saves: Vec<SaveSummary>,
}

fn capture(composition: &Composition, kind: SaveKind) -> SavePayload {
    match kind {
        SaveKind::Composition => SavePayload::Composition {
            snapshot: composition.snapshot(),
        },
        SaveKind::Source => SavePayload::Source {
            code: generate(composition),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/saves
///
/// Stores the session's current page under a new name.
pub async fn handle_create_save(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<CreateSaveRequest>,
) -> Result<(StatusCode, Json<SavedEntry>), AppError> {
    let payload = read_session(&state.sessions, session_id, |c| capture(c, request.kind)).await?;
    let entry = state.saves.save(&request.name, payload).await?;
    info!(%session_id, save_id = %entry.id, kind = entry.payload.kind_str(), "Page saved");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/v1/sessions/:id/saves/:save_id/load
///
/// Replaces the session's composition with a saved snapshot. Source-only saves
/// cannot be loaded back into a session.
pub async fn handle_load_save(
    State(state): State<AppState>,
    Path((session_id, save_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SessionResponse>, AppError> {
    let entry = state.saves.get(save_id).await?;
    let snapshot = match entry.payload {
        SavePayload::Composition { snapshot } => snapshot,
        SavePayload::Source { .. } => {
            return Err(AppError::Validation(format!(
                "Save {save_id} holds source code only and cannot be loaded into a session"
            )))
        }
    };
    let restored = Composition::from_snapshot(snapshot)
        .inspect_err(|e| warn!(%session_id, %save_id, "Saved snapshot rejected: {e}"))?;

    let composition = with_session(&state.sessions, session_id, |c| {
        *c = restored;
        Ok(c.clone())
    })
    .await?;
    info!(%session_id, %save_id, "Save loaded into session");

    Ok(Json(SessionResponse {
        session_id,
        composition,
    }))
}

/// GET /api/v1/saves
pub async fn handle_list_saves(
    State(state): State<AppState>,
) -> Result<Json<SaveListResponse>, AppError> {
    let saves = state.saves.list().await?;
    Ok(Json(SaveListResponse { saves }))
}

/// GET /api/v1/saves/:save_id
pub async fn handle_get_save(
    State(state): State<AppState>,
    Path(save_id): Path<Uuid>,
) -> Result<Json<SavedEntry>, AppError> {
    Ok(Json(state.saves.get(save_id).await?))
}

/// PUT /api/v1/saves/:save_id
///
/// Overwrites the payload from a session's current page; `created_at` is refreshed.
pub async fn handle_overwrite_save(
    State(state): State<AppState>,
    Path(save_id): Path<Uuid>,
    Json(request): Json<OverwriteSaveRequest>,
) -> Result<Json<SavedEntry>, AppError> {
    let payload =
        read_session(&state.sessions, request.session_id, |c| capture(c, request.kind)).await?;
    let entry = state.saves.overwrite(save_id, payload).await?;
    info!(%save_id, session_id = %request.session_id, "Save overwritten");
    Ok(Json(entry))
}

/// DELETE /api/v1/saves/:save_id
pub async fn handle_delete_save(
    State(state): State<AppState>,
    Path(save_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.saves.delete(save_id).await?;
    info!(%save_id, "Save deleted");
    Ok(StatusCode::NO_CONTENT)
}
