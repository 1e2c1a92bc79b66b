//! Plain-data snapshot of a composition for the persistence collaborator, and
//! exact reconstruction from one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::composition::block::{BlockConfig, BlockId};
use crate::composition::model::Composition;
use crate::errors::CompositionError;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSnapshot {
    pub version: u32,
    pub blocks: Vec<BlockConfig>,
    #[serde(default)]
    pub selected_id: Option<BlockId>,
    /// Id counter at the time of the snapshot. Older dumps may omit it.
    #[serde(default)]
    pub next_id: Option<u64>,
}

impl Composition {
    pub fn snapshot(&self) -> CompositionSnapshot {
        CompositionSnapshot {
            version: SNAPSHOT_VERSION,
            blocks: self.blocks().to_vec(),
            selected_id: self.selected_id(),
            next_id: Some(self.next_id()),
        }
    }

    /// Reconstructs a composition. A missing or stale `selected_id` falls back
    /// to the first block; the id counter resumes past every id in the dump and
    /// must leave room for at least one more block.
    pub fn from_snapshot(snapshot: CompositionSnapshot) -> Result<Self, CompositionError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(CompositionError::MalformedSnapshot(format!(
                "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                snapshot.version
            )));
        }
        if snapshot.blocks.is_empty() {
            return Err(CompositionError::MalformedSnapshot(
                "snapshot contains no blocks".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(snapshot.blocks.len());
        for block in &snapshot.blocks {
            if !seen.insert(block.id) {
                return Err(CompositionError::MalformedSnapshot(format!(
                    "duplicate block id {}",
                    block.id
                )));
            }
            block.content.validate().map_err(|reason| {
                CompositionError::MalformedSnapshot(format!("block {}: {reason}", block.id))
            })?;
        }

        let max_id = snapshot.blocks.iter().map(|b| b.id.0).max().unwrap_or(0);
        let next_id = max_id
            .checked_add(1)
            .map(|after_max| snapshot.next_id.unwrap_or(0).max(after_max))
            .filter(|next| *next < u64::MAX)
            .ok_or_else(|| {
                CompositionError::MalformedSnapshot(
                    "block ids leave no room for new blocks".to_string(),
                )
            })?;

        Ok(Composition::from_parts(
            snapshot.blocks,
            snapshot.selected_id,
            next_id,
        ))
    }
}

/// Parses and reconstructs a JSON snapshot. Missing fields and out-of-domain
/// enum values surface as `MalformedSnapshot`.
pub fn parse_snapshot(json: &str) -> Result<Composition, CompositionError> {
    let snapshot: CompositionSnapshot = serde_json::from_str(json)
        .map_err(|e| CompositionError::MalformedSnapshot(e.to_string()))?;
    Composition::from_snapshot(snapshot)
}

/// Same as `parse_snapshot` for an already-decoded JSON value.
pub fn snapshot_from_value(value: serde_json::Value) -> Result<Composition, CompositionError> {
    let snapshot: CompositionSnapshot = serde_json::from_value(value)
        .map_err(|e| CompositionError::MalformedSnapshot(e.to_string()))?;
    Composition::from_snapshot(snapshot)
}
