//! Route definitions for user moderation and metrics.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::{admin, metrics};
use crate::state::AppState;

/// Admin routes, mounted at the `/api` root.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /users                  -> list_users
/// PATCH  /status                 -> update_user_status
/// PATCH  /users/{userId}/status  -> update_user_status_by_path
/// DELETE /users/{userId}         -> delete_user
/// GET    /website-metrics        -> website_metrics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/status", patch(admin::update_user_status))
        .route(
            "/users/{user_id}/status",
            patch(admin::update_user_status_by_path),
        )
        .route("/users/{user_id}", delete(admin::delete_user))
        .route("/website-metrics", get(metrics::website_metrics))
}
