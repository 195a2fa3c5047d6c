pub mod admin;
pub mod claims;
pub mod found_items;
pub mod health;
pub mod lost_items;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register, /login, /change-password              accounts
/// /profile, /my-profile                            own profile (auth)
///
/// /users, /users/{userId}, /users/{userId}/status  moderation (admin)
/// /status                                          moderation (admin)
/// /website-metrics                                 aggregate counts (admin)
///
/// /found-item-categories                           list, create (auth)
/// /found-items                                     search (public), report (auth)
/// /found-items/{itemId}                            get (auth), update, delete (owner)
/// /my-found-items                                  own reports (auth)
/// /recently-reported-found-items                   newest reports (public)
///
/// /lostItem                                        search (public), report (auth)
/// /lostItem/categories                             list, create (auth)
/// /lostItem/my-items                               own reports (auth)
/// /lostItem/recent-lost-items                      newest reports (public)
/// /lostItem/{id}                                   get (auth), update, delete (owner)
/// /lostItem/is-found/{id}                          found flag (owner)
///
/// /claims                                          list (admin), create (auth)
/// /claims/{claimId}                                status (auth), delete (admin)
/// /my-claims                                       own claims (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(admin::router())
        .merge(found_items::router())
        .nest("/lostItem", lost_items::router())
        .merge(claims::router())
}
