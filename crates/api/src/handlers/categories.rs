//! Category reference data for both item kinds.

use axum::extract::State;
use lostfound_core::types::DbId;
use lostfound_db::models::category::{Category, CategoryKind};
use lostfound_db::repositories::CategoryRepo;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAuth;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "Category name must be at most 100 characters")
    )]
    pub name: String,
}

/// The name is stored trimmed, so whitespace alone counts as missing.
fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::new("blank").with_message("Category name is required".into()))
    } else {
        Ok(())
    }
}

async fn create(
    state: &AppState,
    kind: CategoryKind,
    user_id: DbId,
    name: &str,
) -> AppResult<Category> {
    let category = CategoryRepo::create(&state.pool, kind, name.trim()).await?;
    tracing::info!(
        category_id = category.id,
        table = kind.table(),
        user_id,
        "Category created"
    );
    Ok(category)
}

/// POST /api/found-item-categories
pub async fn create_found_category(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ValidatedJson(input): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<ApiResponse<Category>> {
    let category = create(&state, CategoryKind::Found, auth.user_id, &input.name).await?;
    Ok(ApiResponse::created(
        "Found item category created successfully",
        category,
    ))
}

/// GET /api/found-item-categories
pub async fn list_found_categories(
    State(state): State<AppState>,
    RequireAuth(_auth): RequireAuth,
) -> AppResult<ApiResponse<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool, CategoryKind::Found).await?;
    Ok(ApiResponse::ok(
        "Found item categories retrieved successfully",
        categories,
    ))
}

/// POST /api/lostItem/categories
pub async fn create_lost_category(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ValidatedJson(input): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<ApiResponse<Category>> {
    let category = create(&state, CategoryKind::Lost, auth.user_id, &input.name).await?;
    Ok(ApiResponse::created(
        "Lost item category created successfully",
        category,
    ))
}

/// GET /api/lostItem/categories
pub async fn list_lost_categories(
    State(state): State<AppState>,
    RequireAuth(_auth): RequireAuth,
) -> AppResult<ApiResponse<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool, CategoryKind::Lost).await?;
    Ok(ApiResponse::ok(
        "Lost item categories retrieved successfully",
        categories,
    ))
}
