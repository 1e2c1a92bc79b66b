//! Save store: named, timestamped copies of a page the user can come back to.
//!
//! A save holds either a composition snapshot (reloadable into a session) or
//! the generated source text. Names are trimmed and must not be empty.
//! Overwriting a save replaces its payload and refreshes `created_at`; the id
//! and name are kept.
//!
//! `AppState` holds an `Arc<dyn SaveStore>`; `InMemorySaveStore` is the
//! process-local backend.

pub mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::composition::CompositionSnapshot;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SavePayload {
    Composition { snapshot: CompositionSnapshot },
    Source { code: String },
}

impl SavePayload {
    pub fn kind_str(&self) -> &'static str {
        match self {
            SavePayload::Composition { .. } => "composition",
            SavePayload::Source { .. } => "source",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub payload: SavePayload,
}

/// Listing row; payloads stay out of the index.
#[derive(Debug, Clone, Serialize)]
pub struct SaveSummary {
    pub id: Uuid,
    pub name: String,
    pub kind: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<&SavedEntry> for SaveSummary {
    fn from(entry: &SavedEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            kind: entry.payload.kind_str(),
            created_at: entry.created_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait SaveStore: Send + Sync {
    async fn save(&self, name: &str, payload: SavePayload) -> Result<SavedEntry, AppError>;

    /// Saves in creation order.
    async fn list(&self) -> Result<Vec<SaveSummary>, AppError>;

    async fn get(&self, id: Uuid) -> Result<SavedEntry, AppError>;

    async fn overwrite(&self, id: Uuid, payload: SavePayload) -> Result<SavedEntry, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

pub fn normalize_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("save name cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

fn save_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Save {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// InMemorySaveStore
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemorySaveStore {
    entries: Arc<RwLock<Vec<SavedEntry>>>,
}

impl InMemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaveStore for InMemorySaveStore {
    async fn save(&self, name: &str, payload: SavePayload) -> Result<SavedEntry, AppError> {
        let entry = SavedEntry {
            id: Uuid::new_v4(),
            name: normalize_name(name)?,
            created_at: Utc::now(),
            payload,
        };
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<SaveSummary>, AppError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .map(SaveSummary::from)
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<SavedEntry, AppError> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| save_not_found(id))
    }

    async fn overwrite(&self, id: Uuid, payload: SavePayload) -> Result<SavedEntry, AppError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| save_not_found(id))?;
        entry.payload = payload;
        entry.created_at = Utc::now();
        Ok(entry.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(save_not_found(id));
        }
        Ok(())
    }
}
