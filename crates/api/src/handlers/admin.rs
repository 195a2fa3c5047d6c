//! Admin-only user moderation.

use std::collections::HashMap;

use axum::extract::State;
use lostfound_core::error::CoreError;
use lostfound_core::status::UserStatus;
use lostfound_core::types::DbId;
use lostfound_db::models::user::{UserResponse, UserWithProfile};
use lostfound_db::repositories::{ProfileRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `PATCH /api/status`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusRequest {
    pub user_id: DbId,
    pub status: UserStatus,
}

/// Request body for `PATCH /api/users/{userId}/status`.
#[derive(Debug, Deserialize, Validate)]
pub struct StatusBody {
    pub status: UserStatus,
}

/// GET /api/users
///
/// Every user with their profile, newest first.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<ApiResponse<Vec<UserWithProfile>>> {
    let users = UserRepo::list(&state.pool).await?;
    let mut profiles: HashMap<DbId, _> = ProfileRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|p| (p.user_id, p))
        .collect();

    let data = users
        .iter()
        .map(|user| UserWithProfile {
            user: user.into(),
            profile: profiles.remove(&user.id),
        })
        .collect();

    Ok(ApiResponse::ok("Users retrieved successfully", data))
}

/// PATCH /api/status
pub async fn update_user_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedJson(input): ValidatedJson<UpdateUserStatusRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    set_status(&state, admin.user_id, input.user_id, input.status).await
}

/// PATCH /api/users/{userId}/status
pub async fn update_user_status_by_path(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(user_id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<StatusBody>,
) -> AppResult<ApiResponse<UserResponse>> {
    set_status(&state, admin.user_id, user_id, input.status).await
}

async fn set_status(
    state: &AppState,
    admin_id: DbId,
    user_id: DbId,
    status: UserStatus,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = UserRepo::update_status(&state.pool, user_id, status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })
        })?;

    tracing::info!(user_id, admin_id, status = %status, "User status updated");

    Ok(ApiResponse::ok(
        "User status updated successfully",
        (&user).into(),
    ))
}

/// DELETE /api/users/{userId}
///
/// Profile, reported items and claims are removed with the account.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(user_id): ApiPath<DbId>,
) -> AppResult<ApiResponse<UserResponse>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })
    };

    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(not_found)?;
    if !UserRepo::delete(&state.pool, user_id).await? {
        return Err(not_found());
    }

    tracing::info!(user_id, admin_id = admin.user_id, "User deleted");

    Ok(ApiResponse::ok("User deleted successfully", (&user).into()))
}
