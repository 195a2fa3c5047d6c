//! Handlers for found item reports.
//!
//! Update and delete are scoped to the reporter. A non-owner gets the same
//! 404 as a request for an id that does not exist.

use axum::extract::State;
use lostfound_core::error::CoreError;
use lostfound_core::search::PageMeta;
use lostfound_core::types::{DbId, Timestamp};
use lostfound_db::models::found_item::{
    CreateFoundItem, FoundItem, FoundItemDetail, UpdateFoundItem,
};
use lostfound_db::repositories::FoundItemRepo;
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

/// Request body for `POST /api/found-items`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportFoundItemRequest {
    pub category_id: DbId,
    #[serde(alias = "foundItemName")]
    #[validate(length(min = 1, max = 200, message = "Item name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    pub date_found: Timestamp,
    #[validate(nested)]
    pub contact_info: Option<ContactInfoInput>,
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Option<Vec<String>>,
}

/// Request body for `PUT /api/found-items/{itemId}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoundItemRequest {
    pub category_id: Option<DbId>,
    #[serde(alias = "foundItemName")]
    #[validate(length(min = 1, max = 200, message = "Item name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Location must not be empty"))]
    pub location: Option<String>,
    pub date_found: Option<Timestamp>,
    #[validate(nested)]
    pub contact_info: Option<ContactInfoInput>,
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Option<Vec<String>>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "FoundItem",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/found-items
pub async fn report_found_item(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ValidatedJson(input): ValidatedJson<ReportFoundItemRequest>,
) -> AppResult<ApiResponse<FoundItem>> {
    let create = CreateFoundItem {
        category_id: input.category_id,
        name: input.name,
        description: input.description,
        location: input.location,
        date_found: input.date_found,
        contact_info: input.contact_info.unwrap_or_default().into(),
        images: input.images.unwrap_or_default(),
    };
    let item = FoundItemRepo::create(&state.pool, auth.user_id, &create).await?;

    tracing::info!(found_item_id = item.id, user_id = auth.user_id, "Found item reported");

    Ok(ApiResponse::created("Found item reported successfully", item))
}

/// GET /api/found-items
///
/// Public, filtered and paged. `meta.total` counts the filtered set.
pub async fn list_found_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ItemSearchParams>,
) -> AppResult<ApiResponse<Vec<FoundItemDetail>>> {
    let search = params.into_search();
    let (items, total) = FoundItemRepo::search(&state.pool, &search).await?;

    Ok(
        ApiResponse::ok("Found items retrieved successfully", items)
            .with_meta(PageMeta::new(total, search.pagination)),
    )
}

/// GET /api/my-found-items
pub async fn my_found_items(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> AppResult<ApiResponse<Vec<FoundItemDetail>>> {
    let items = FoundItemRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok("Found items retrieved successfully", items))
}

/// GET /api/recently-reported-found-items
pub async fn recent_found_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RecentParams>,
) -> AppResult<ApiResponse<Vec<FoundItemDetail>>> {
    let items = FoundItemRepo::list_recent(&state.pool, params.limit()).await?;
    Ok(ApiResponse::ok(
        "Recently reported found items retrieved successfully",
        items,
    ))
}

/// GET /api/found-items/{itemId}
pub async fn get_found_item(
    State(state): State<AppState>,
    RequireAuth(_auth): RequireAuth,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<FoundItemDetail>> {
    let item = FoundItemRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ApiResponse::ok("Found item retrieved successfully", item))
}

/// PUT /api/found-items/{itemId}
pub async fn update_found_item(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFoundItemRequest>,
) -> AppResult<ApiResponse<FoundItem>> {
    let update = UpdateFoundItem {
        category_id: input.category_id,
        name: input.name,
        description: input.description,
        location: input.location,
        date_found: input.date_found,
        contact_info: input.contact_info.map(Into::into),
        images: input.images,
    };
    let item = FoundItemRepo::update_owned(&state.pool, id, auth.user_id, &update)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(found_item_id = id, user_id = auth.user_id, "Found item updated");

    Ok(ApiResponse::ok("Found item updated successfully", item))
}

/// DELETE /api/found-items/{itemId}
///
/// Claims filed against the item are removed with it.
pub async fn delete_found_item(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<FoundItem>> {
    let item = FoundItemRepo::delete_owned(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(found_item_id = id, user_id = auth.user_id, "Found item deleted");

    Ok(ApiResponse::ok("Found item deleted successfully", item))
}
