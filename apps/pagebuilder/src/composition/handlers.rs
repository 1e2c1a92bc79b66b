//! Axum route handlers for builder sessions and their blocks.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::composition::presets::{self, BlockPreset};
use crate::composition::snapshot::snapshot_from_value;
use crate::composition::{
    BlockConfig, BlockId, BlockPatch, Composition, CompositionSnapshot, MoveDirection,
};
use crate::errors::AppError;
use crate::generation::generate;
use crate::layout::{preview_block, BlockPreview};
use crate::sessions::{insert_session, read_session, remove_session, with_session};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BlockCatalogQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlockCatalogResponse {
    pub presets: Vec<BlockPreset>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub preset: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub composition: Composition,
}

#[derive(Debug, Deserialize)]
pub struct AppendBlockRequest {
    pub preset: Option<String>,
    #[serde(flatten)]
    pub patch: BlockPatch,
}

#[derive(Debug, Serialize)]
pub struct AppendBlockResponse {
    pub block_id: BlockId,
    pub composition: Composition,
}

#[derive(Debug, Deserialize)]
pub struct MoveBlockRequest {
    pub direction: MoveDirection,
}

#[derive(Debug, Serialize)]
pub struct CodeResponse {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub selected_id: Option<BlockId>,
    pub blocks: Vec<BlockPreview>,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Preset defaults (when named) layered under the caller's own fields.
fn block_defaults(preset: Option<&str>, patch: &BlockPatch) -> Result<BlockPatch, AppError> {
    let base = match preset {
        Some(id) => {
            presets::find(id)
                .ok_or_else(|| AppError::Validation(format!("unknown preset '{id}'")))?
                .config
        }
        None => BlockPatch::default(),
    };
    let merged = base.merged(patch);
    merged.validate().map_err(AppError::Validation)?;
    Ok(merged)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/blocks?category=
///
/// Lists the preset catalog, optionally narrowed to one category.
pub async fn handle_list_blocks(
    Query(query): Query<BlockCatalogQuery>,
) -> Result<Json<BlockCatalogResponse>, AppError> {
    let presets = presets::by_category(query.category.as_deref()).map_err(AppError::Validation)?;
    Ok(Json(BlockCatalogResponse { presets }))
}

/// POST /api/v1/sessions
///
/// Starts a session with a single selected block, built from `preset` when given.
pub async fn handle_create_session(
    State(state): State<AppState>,
    body: Option<Json<CreateSessionRequest>>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let defaults = block_defaults(request.preset.as_deref(), &BlockPatch::default())?;
    let composition = Composition::new(&defaults);

    let session_id = insert_session(&state.sessions, composition.clone()).await;
    info!(%session_id, preset = ?request.preset, "Session created");

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            composition,
        }),
    ))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let composition = read_session(&state.sessions, session_id, Composition::clone).await?;
    Ok(Json(SessionResponse {
        session_id,
        composition,
    }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    remove_session(&state.sessions, session_id).await?;
    info!(%session_id, "Session deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/blocks
///
/// Appends a block (preset defaults, then the body's own fields) and selects it.
pub async fn handle_append_block(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AppendBlockRequest>,
) -> Result<(StatusCode, Json<AppendBlockResponse>), AppError> {
    let defaults = block_defaults(request.preset.as_deref(), &request.patch)?;

    let (block_id, composition) = with_session(&state.sessions, session_id, |c| {
        let id = c.append(&defaults)?;
        Ok((id, c.clone()))
    })
    .await?;
    info!(%session_id, %block_id, preset = ?request.preset, "Block appended");

    Ok((
        StatusCode::CREATED,
        Json(AppendBlockResponse {
            block_id,
            composition,
        }),
    ))
}

/// PATCH /api/v1/sessions/:id/blocks/:block_id
///
/// Merges the given fields into one block and returns it.
pub async fn handle_update_block(
    State(state): State<AppState>,
    Path((session_id, block_id)): Path<(Uuid, BlockId)>,
    Json(patch): Json<BlockPatch>,
) -> Result<Json<BlockConfig>, AppError> {
    patch.validate().map_err(AppError::Validation)?;

    let block = with_session(&state.sessions, session_id, |c| {
        c.update(block_id, &patch)?;
        c.get(block_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Block {block_id} not found")))
    })
    .await?;

    Ok(Json(block))
}

/// DELETE /api/v1/sessions/:id/blocks/:block_id
///
/// Removing the only remaining block is rejected with 409.
pub async fn handle_remove_block(
    State(state): State<AppState>,
    Path((session_id, block_id)): Path<(Uuid, BlockId)>,
) -> Result<Json<SessionResponse>, AppError> {
    let composition = with_session(&state.sessions, session_id, |c| {
        c.remove(block_id)?;
        Ok(c.clone())
    })
    .await
    .inspect_err(|e| warn!(%session_id, %block_id, "Block removal rejected: {e}"))?;
    info!(%session_id, %block_id, "Block removed");

    Ok(Json(SessionResponse {
        session_id,
        composition,
    }))
}

/// POST /api/v1/sessions/:id/blocks/:block_id/move
pub async fn handle_move_block(
    State(state): State<AppState>,
    Path((session_id, block_id)): Path<(Uuid, BlockId)>,
    Json(request): Json<MoveBlockRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let composition = with_session(&state.sessions, session_id, |c| {
        c.move_block(block_id, request.direction)?;
        Ok(c.clone())
    })
    .await?;

    Ok(Json(SessionResponse {
        session_id,
        composition,
    }))
}

/// POST /api/v1/sessions/:id/blocks/:block_id/select
pub async fn handle_select_block(
    State(state): State<AppState>,
    Path((session_id, block_id)): Path<(Uuid, BlockId)>,
) -> Result<Json<SessionResponse>, AppError> {
    let composition = with_session(&state.sessions, session_id, |c| {
        c.select(block_id)?;
        Ok(c.clone())
    })
    .await?;

    Ok(Json(SessionResponse {
        session_id,
        composition,
    }))
}

/// GET /api/v1/sessions/:id/code
pub async fn handle_get_code(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CodeResponse>, AppError> {
    let code = read_session(&state.sessions, session_id, generate).await?;
    Ok(Json(CodeResponse { code }))
}

/// GET /api/v1/sessions/:id/preview
///
/// Render-ready payload for every block, in page order.
pub async fn handle_get_preview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PreviewResponse>, AppError> {
    let options = state.config.preview_options();
    let response = read_session(&state.sessions, session_id, |c| {
        let selected_id = c.selected_id();
        PreviewResponse {
            selected_id,
            blocks: c
                .blocks()
                .iter()
                .map(|b| preview_block(b, Some(b.id) == selected_id, &options))
                .collect(),
        }
    })
    .await?;
    Ok(Json(response))
}

/// GET /api/v1/sessions/:id/snapshot
pub async fn handle_export_snapshot(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CompositionSnapshot>, AppError> {
    let snapshot = read_session(&state.sessions, session_id, Composition::snapshot).await?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/sessions/:id/snapshot
///
/// Replaces the session's composition. A malformed snapshot is rejected with
/// 422 and the session keeps its current state.
pub async fn handle_load_snapshot(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SessionResponse>, AppError> {
    let restored = snapshot_from_value(body)
        .inspect_err(|e| warn!(%session_id, "Snapshot load failed: {e}"))?;

    let composition = with_session(&state.sessions, session_id, |c| {
        *c = restored;
        Ok(c.clone())
    })
    .await?;
    info!(%session_id, blocks = composition.len(), "Snapshot loaded");

    Ok(Json(SessionResponse {
        session_id,
        composition,
    }))
}
