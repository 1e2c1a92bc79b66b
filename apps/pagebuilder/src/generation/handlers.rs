//! Axum route handler for stateless source generation.

use axum::Json;
use serde_json::Value;
use tracing::warn;

use crate::composition::handlers::CodeResponse;
use crate::composition::snapshot::snapshot_from_value;
use crate::errors::AppError;
use crate::generation::codegen::generate;

/// POST /api/v1/generate
///
/// Takes a composition snapshot and returns its `<SectionBlock>` source
/// without creating a session.
pub async fn handle_generate(Json(body): Json<Value>) -> Result<Json<CodeResponse>, AppError> {
    let composition =
        snapshot_from_value(body).inspect_err(|e| warn!("Generate rejected snapshot: {e}"))?;
    Ok(Json(CodeResponse {
        code: generate(&composition),
    }))
}
