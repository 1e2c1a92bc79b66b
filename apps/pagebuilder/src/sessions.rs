//! In-memory builder sessions. Each session owns one `Composition`; every
//! request holds the write lock for a single synchronous edit, so mutations of
//! one session are totally ordered.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::composition::Composition;
use crate::errors::AppError;

pub type SessionStore = Arc<RwLock<HashMap<Uuid, Composition>>>;

pub fn create_session_store() -> SessionStore {
    Arc::new(RwLock::new(HashMap::new()))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

pub async fn insert_session(store: &SessionStore, composition: Composition) -> Uuid {
    let id = Uuid::new_v4();
    store.write().await.insert(id, composition);
    id
}

/// Runs `f` against the session under the read lock.
pub async fn read_session<T>(
    store: &SessionStore,
    id: Uuid,
    f: impl FnOnce(&Composition) -> T,
) -> Result<T, AppError> {
    let sessions = store.read().await;
    let composition = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    Ok(f(composition))
}

/// Applies one edit under the write lock. The edit's own error is passed through.
pub async fn with_session<T>(
    store: &SessionStore,
    id: Uuid,
    f: impl FnOnce(&mut Composition) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut sessions = store.write().await;
    let composition = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    f(composition)
}

pub async fn remove_session(store: &SessionStore, id: Uuid) -> Result<(), AppError> {
    store
        .write()
        .await
        .remove(&id)
        .map(|_| ())
        .ok_or_else(|| session_not_found(id))
}
