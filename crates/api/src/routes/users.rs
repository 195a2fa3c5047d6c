//! Route definitions for accounts and profiles.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{profile, users};
use crate::state::AppState;

/// Account and profile routes, mounted at the `/api` root.
///
/// ```text
/// POST  /register         -> register
/// POST  /login            -> login
/// PATCH /change-password  -> change_password (auth)
/// GET   /profile          -> get_profile (auth)
/// PATCH /profile          -> update_profile (auth)
/// GET   /my-profile       -> get_my_profile (auth)
/// PUT   /my-profile       -> update_profile (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/change-password", patch(users::change_password))
        .route(
            "/profile",
            get(profile::get_profile).patch(profile::update_profile),
        )
        .route(
            "/my-profile",
            get(profile::get_my_profile).put(profile::update_profile),
        )
}
