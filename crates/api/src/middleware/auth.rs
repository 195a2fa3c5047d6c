//! JWT-based authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use lostfound_core::error::CoreError;
use lostfound_core::status::UserRole;
use lostfound_core::types::DbId;
use lostfound_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from the `Authorization` header.
///
/// Accepts `Bearer <token>` as well as a bare token, since existing clients
/// send the token without a scheme. The account is re-read on every request:
/// a deleted account is rejected with 401 and a blocked one with 403, and the
/// role comes from the row rather than the token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub email: String,
    pub role: UserRole,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("You are not authorized!".into()))
            })?;

        let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
        if token.is_empty() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "You are not authorized!".into(),
            )));
        }

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("You are not authorized!".into()))
            })?;
        if user.is_blocked() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Your account has been blocked".into(),
            )));
        }

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}
