pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::composition::handlers as composition;
use crate::generation::handlers as generation;
use crate::saves::handlers as saves;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Block catalog
        .route("/api/v1/blocks", get(composition::handle_list_blocks))
        // Builder sessions
        .route("/api/v1/sessions", post(composition::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(composition::handle_get_session).delete(composition::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/blocks",
            post(composition::handle_append_block),
        )
        .route(
            "/api/v1/sessions/:id/blocks/:block_id",
            patch(composition::handle_update_block)
                .delete(composition::handle_remove_block),
        )
        .route(
            "/api/v1/sessions/:id/blocks/:block_id/move",
            post(composition::handle_move_block),
        )
        .route(
            "/api/v1/sessions/:id/blocks/:block_id/select",
            post(composition::handle_select_block),
        )
        .route("/api/v1/sessions/:id/code", get(composition::handle_get_code))
        .route(
            "/api/v1/sessions/:id/preview",
            get(composition::handle_get_preview),
        )
        .route(
            "/api/v1/sessions/:id/snapshot",
            get(composition::handle_export_snapshot).put(composition::handle_load_snapshot),
        )
        // Saves
        .route("/api/v1/sessions/:id/saves", post(saves::handle_create_save))
        .route(
            "/api/v1/sessions/:id/saves/:save_id/load",
            post(saves::handle_load_save),
        )
        .route("/api/v1/saves", get(saves::handle_list_saves))
        .route(
            "/api/v1/saves/:save_id",
            get(saves::handle_get_save)
                .put(saves::handle_overwrite_save)
                .delete(saves::handle_delete_save),
        )
        // Stateless generation
        .route("/api/v1/generate", post(generation::handle_generate))
        .with_state(state)
}
