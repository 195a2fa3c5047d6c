//! Route definitions for the `/lostItem` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{categories, lost_items};
use crate::state::AppState;

/// Routes mounted at `/lostItem`.
///
/// ```text
/// POST   /categories          -> create_lost_category (auth)
/// GET    /categories          -> list_lost_categories (auth)
/// POST   /                    -> report_lost_item (auth)
/// GET    /                    -> list_lost_items
/// GET    /my-items            -> my_lost_items (auth)
/// GET    /recent-lost-items   -> recent_lost_items
/// GET    /{id}                -> get_lost_item (auth)
/// PUT    /{id}                -> update_lost_item (owner)
/// DELETE /{id}                -> delete_lost_item (owner)
/// PATCH  /is-found/{id}       -> update_is_found (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_lost_categories).post(categories::create_lost_category),
        )
        .route(
            "/",
            get(lost_items::list_lost_items).post(lost_items::report_lost_item),
        )
        .route("/my-items", get(lost_items::my_lost_items))
        .route("/recent-lost-items", get(lost_items::recent_lost_items))
        .route(
            "/{id}",
            get(lost_items::get_lost_item)
                .put(lost_items::update_lost_item)
                .delete(lost_items::delete_lost_item),
        )
        .route("/is-found/{id}", patch(lost_items::update_is_found))
}
