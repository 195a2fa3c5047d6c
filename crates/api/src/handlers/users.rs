//! Handlers for registration, login and password changes.

use axum::extract::State;
use lostfound_core::error::CoreError;
use lostfound_core::status::UserRole;
use lostfound_core::types::DbId;
use lostfound_db::models::profile::UpsertProfile;
use lostfound_db::models::user::{CreateUser, UserWithProfile};
use lostfound_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAuth;
use crate::response::ApiResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username/email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Optional profile fields accepted at registration and on profile updates.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,
    #[validate(range(min = 0, message = "Age must not be negative"))]
    pub age: Option<i32>,
    #[validate(url(message = "Profile picture must be a valid URL"))]
    pub profile_picture: Option<String>,
}

impl From<ProfileInput> for UpsertProfile {
    fn from(input: ProfileInput) -> Self {
        Self {
            bio: input.bio,
            age: input.age,
            profile_picture: input.profile_picture,
        }
    }
}

/// Request body for `POST /api/register`.
///
/// There is no `role` field: self-registered accounts are always `user`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "passwords_match"))]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
    pub confirm_password: String,
    #[validate(nested)]
    pub profile: Option<ProfileInput>,
}

fn passwords_match(input: &RegisterRequest) -> Result<(), ValidationError> {
    if input.password != input.confirm_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("Passwords don't match".into()));
    }
    Ok(())
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username or email is required"))]
    pub username_or_email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub token: String,
}

/// Request body for `PATCH /api/change-password`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "new_passwords_match"))]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 8, message = "New password must be at least 8 characters long"))]
    pub new_password: String,
    pub confirm_new_password: String,
}

fn new_passwords_match(input: &ChangePasswordRequest) -> Result<(), ValidationError> {
    if input.new_password != input.confirm_new_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("New passwords don't match".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Create a `user` account and its profile in one transaction.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<ApiResponse<UserWithProfile>> {
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        name: input.name,
        email: input.email,
        password_hash,
        role: UserRole::User,
    };
    let profile: UpsertProfile = input.profile.unwrap_or_default().into();

    // The unique constraint still catches a concurrent registration (409).
    let (user, profile) = UserRepo::create_with_profile(&state.pool, &create, &profile).await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(ApiResponse::created(
        "User registered successfully",
        UserWithProfile {
            user: (&user).into(),
            profile: Some(profile),
        },
    ))
}

/// POST /api/login
///
/// Resolve the account by name or email and issue a bearer token.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let user = UserRepo::find_by_name_or_email(&state.pool, &input.username_or_email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = user.id, "Login failed: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    if user.is_blocked() {
        tracing::warn!(user_id = user.id, "Login refused: account blocked");
        return Err(AppError::Core(CoreError::Forbidden(
            "Your account has been blocked".into(),
        )));
    }

    let token = generate_token(user.id, &user.email, user.role.as_str(), &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(ApiResponse::ok(
        "User logged in successfully",
        LoginResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            token,
        },
    ))
}

/// PATCH /api/change-password
pub async fn change_password(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ValidatedJson(input): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<ApiResponse<()>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &new_hash).await?;

    tracing::info!(user_id = user.id, "Password changed");

    Ok(ApiResponse::ok("Password changed successfully", ()))
}
