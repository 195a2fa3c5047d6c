//! Handlers for the caller's own profile.

use axum::extract::State;
use lostfound_core::error::CoreError;
use lostfound_db::models::claim::Claim;
use lostfound_db::models::lost_item::LostItemDetail;
use lostfound_db::models::profile::{UpdateIdentity, UpsertProfile, UserProfile};
use lostfound_db::models::user::{UserResponse, UserWithProfile};
use lostfound_db::repositories::{ClaimRepo, LostItemRepo, ProfileRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAuth;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `PATCH /api/profile` and `PUT /api/my-profile`.
///
/// Every field is optional; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,
    #[validate(range(min = 0, message = "Age must not be negative"))]
    pub age: Option<i32>,
    #[validate(url(message = "Profile picture must be a valid URL"))]
    pub profile_picture: Option<String>,
}

/// Everything shown on the caller's profile page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOverview {
    #[serde(flatten)]
    pub user: UserResponse,
    pub profile: Option<UserProfile>,
    pub lost_items: Vec<LostItemDetail>,
    pub claims: Vec<Claim>,
}

/// A profile row with a summary of its owner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyProfile {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub user: UserResponse,
}

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> AppResult<ApiResponse<ProfileOverview>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth.user_id,
            })
        })?;

    let profile = ProfileRepo::find_by_user_id(&state.pool, user.id).await?;
    let lost_items = LostItemRepo::list_for_user(&state.pool, user.id).await?;
    let claims = ClaimRepo::list_for_user(&state.pool, user.id).await?;

    Ok(ApiResponse::ok(
        "User profile retrieved successfully",
        ProfileOverview {
            user: (&user).into(),
            profile,
            lost_items,
            claims,
        },
    ))
}

/// GET /api/my-profile
///
/// 404 until a profile row exists for the caller.
pub async fn get_my_profile(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> AppResult<ApiResponse<MyProfile>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "UserProfile",
            id: auth.user_id,
        })
    };

    let profile = ProfileRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(not_found)?;
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(ApiResponse::ok(
        "Profile retrieved successfully",
        MyProfile {
            profile,
            user: (&user).into(),
        },
    ))
}

/// PATCH /api/profile, PUT /api/my-profile
///
/// Updates name/email and inserts or merges the profile atomically.
pub async fn update_profile(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ValidatedJson(input): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<ApiResponse<UserWithProfile>> {
    let identity = UpdateIdentity {
        name: input.name,
        email: input.email,
    };
    let profile = UpsertProfile {
        bio: input.bio,
        age: input.age,
        profile_picture: input.profile_picture,
    };

    let (user, profile) =
        ProfileRepo::update_with_identity(&state.pool, auth.user_id, &identity, &profile)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFound {
                    entity: "User",
                    id: auth.user_id,
                })
            })?;

    tracing::info!(user_id = user.id, profile_id = profile.id, "Profile updated");

    Ok(ApiResponse::ok(
        "User profile updated successfully",
        UserWithProfile {
            user: (&user).into(),
            profile: Some(profile),
        },
    ))
}
