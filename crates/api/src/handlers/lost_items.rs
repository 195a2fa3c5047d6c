//! Handlers for lost item reports, mounted under `/api/lostItem`.
//!
//! Same ownership rules as found items: mutations by a non-owner report 404.

use axum::extract::State;
use lostfound_core::error::CoreError;
use lostfound_core::search::PageMeta;
use lostfound_core::types::{DbId, Timestamp};
use lostfound_db::models::lost_item::{CreateLostItem, LostItem, LostItemDetail, UpdateLostItem};
use lostfound_db::repositories::LostItemRepo;
use serde::Deserialize;
use validator::Validate;

use super::items::{validate_image_urls, ContactInfoInput};
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::middleware::rbac::RequireAuth;
use crate::query::{ItemSearchParams, RecentParams};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/lostItem`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportLostItemRequest {
    pub category_id: DbId,
    #[serde(alias = "lostItemName")]
    #[validate(length(min = 1, max = 200, message = "Item name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub location: Option<String>,
    pub date_lost: Option<Timestamp>,
    #[serde(default)]
    pub is_found: bool,
    #[validate(nested)]
    pub contact_info: ContactInfoInput,
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Option<Vec<String>>,
}

/// Request body for `PUT /api/lostItem/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLostItemRequest {
    pub category_id: Option<DbId>,
    #[serde(alias = "lostItemName")]
    #[validate(length(min = 1, max = 200, message = "Item name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
    pub location: Option<String>,
    pub date_lost: Option<Timestamp>,
    pub is_found: Option<bool>,
    #[validate(nested)]
    pub contact_info: Option<ContactInfoInput>,
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Option<Vec<String>>,
}

/// Request body for `PATCH /api/lostItem/is-found/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIsFoundRequest {
    pub is_found: bool,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "LostItem",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/lostItem
pub async fn report_lost_item(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ValidatedJson(input): ValidatedJson<ReportLostItemRequest>,
) -> AppResult<ApiResponse<LostItem>> {
    let create = CreateLostItem {
        category_id: input.category_id,
        name: input.name,
        description: input.description,
        location: input.location,
        date_lost: input.date_lost,
        is_found: input.is_found,
        contact_info: input.contact_info.into(),
        images: input.images.unwrap_or_default(),
    };
    let item = LostItemRepo::create(&state.pool, auth.user_id, &create).await?;

    tracing::info!(lost_item_id = item.id, user_id = auth.user_id, "Lost item reported");

    Ok(ApiResponse::created("Lost item reported successfully", item))
}

/// GET /api/lostItem
pub async fn list_lost_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ItemSearchParams>,
) -> AppResult<ApiResponse<Vec<LostItemDetail>>> {
    let search = params.into_search();
    let (items, total) = LostItemRepo::search(&state.pool, &search).await?;

    Ok(
        ApiResponse::ok("Lost items retrieved successfully", items)
            .with_meta(PageMeta::new(total, search.pagination)),
    )
}

/// GET /api/lostItem/my-items
pub async fn my_lost_items(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> AppResult<ApiResponse<Vec<LostItemDetail>>> {
    let items = LostItemRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok(
        "User's lost items retrieved successfully",
        items,
    ))
}

/// GET /api/lostItem/recent-lost-items
pub async fn recent_lost_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RecentParams>,
) -> AppResult<ApiResponse<Vec<LostItemDetail>>> {
    let items = LostItemRepo::list_recent(&state.pool, params.limit()).await?;
    Ok(ApiResponse::ok(
        "Recently reported lost items retrieved successfully",
        items,
    ))
}

/// GET /api/lostItem/{id}
pub async fn get_lost_item(
    State(state): State<AppState>,
    RequireAuth(_auth): RequireAuth,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<LostItemDetail>> {
    let item = LostItemRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ApiResponse::ok("Lost item retrieved successfully", item))
}

/// PUT /api/lostItem/{id}
pub async fn update_lost_item(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateLostItemRequest>,
) -> AppResult<ApiResponse<LostItem>> {
    let update = UpdateLostItem {
        category_id: input.category_id,
        name: input.name,
        description: input.description,
        location: input.location,
        date_lost: input.date_lost,
        is_found: input.is_found,
        contact_info: input.contact_info.map(Into::into),
        images: input.images,
    };
    let item = LostItemRepo::update_owned(&state.pool, id, auth.user_id, &update)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(lost_item_id = id, user_id = auth.user_id, "Lost item updated");

    Ok(ApiResponse::ok("Lost item updated successfully", item))
}

/// DELETE /api/lostItem/{id}
///
/// Claims that linked this report stay, with the link cleared.
pub async fn delete_lost_item(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<LostItem>> {
    let item = LostItemRepo::delete_owned(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(lost_item_id = id, user_id = auth.user_id, "Lost item deleted");

    Ok(ApiResponse::ok("Lost item deleted successfully", item))
}

/// PATCH /api/lostItem/is-found/{id}
pub async fn update_is_found(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateIsFoundRequest>,
) -> AppResult<ApiResponse<LostItem>> {
    let item = LostItemRepo::set_is_found_owned(&state.pool, id, auth.user_id, input.is_found)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        lost_item_id = id,
        user_id = auth.user_id,
        is_found = input.is_found,
        "Lost item found flag updated"
    );

    Ok(ApiResponse::ok("'isFound' value updated successfully", item))
}
