//! Route definitions for found items and their categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, found_items};
use crate::state::AppState;

/// Found item routes, mounted at the `/api` root.
///
/// ```text
/// POST   /found-item-categories             -> create_found_category (auth)
/// GET    /found-item-categories             -> list_found_categories (auth)
/// POST   /found-items                       -> report_found_item (auth)
/// GET    /found-items                       -> list_found_items
/// GET    /my-found-items                    -> my_found_items (auth)
/// GET    /recently-reported-found-items     -> recent_found_items
/// GET    /found-items/{itemId}              -> get_found_item (auth)
/// PUT    /found-items/{itemId}              -> update_found_item (owner)
/// DELETE /found-items/{itemId}              -> delete_found_item (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/found-item-categories",
            get(categories::list_found_categories).post(categories::create_found_category),
        )
        .route(
            "/found-items",
            get(found_items::list_found_items).post(found_items::report_found_item),
        )
        .route("/my-found-items", get(found_items::my_found_items))
        .route(
            "/recently-reported-found-items",
            get(found_items::recent_found_items),
        )
        .route(
            "/found-items/{item_id}",
            get(found_items::get_found_item)
                .put(found_items::update_found_item)
                .delete(found_items::delete_found_item),
        )
}
