//! Handlers for ownership claims against found items.

use axum::extract::State;
use lostfound_core::error::CoreError;
use lostfound_core::status::ClaimStatus;
use lostfound_core::types::{DbId, Timestamp};
use lostfound_db::models::claim::{Claim, ClaimDetail, CreateClaim};
use lostfound_db::repositories::{ClaimRepo, FoundItemRepo, LostItemRepo};
use serde::Deserialize;
use validator::Validate;

use super::items::validate_image_urls;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/claims`.
///
/// `lostItemId`, when given, must be one of the claimant's own lost item
/// reports.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub found_item_id: DbId,
    pub lost_item_id: Option<DbId>,
    #[validate(length(min = 1, message = "Distinguishing features are required"))]
    pub distinguishing_features: String,
    pub lost_date: Timestamp,
    pub proof_of_purchase: Option<String>,
    #[validate(custom(function = "validate_image_urls"))]
    pub photos: Option<Vec<String>>,
    pub ownership_docs: Option<String>,
    pub detailed_loss_account: Option<String>,
    pub matching_accessories: Option<String>,
    pub security_features: Option<String>,
    pub third_party_confirmation: Option<String>,
}

/// Request body for `PUT /api/claims/{claimId}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClaimStatusRequest {
    pub status: ClaimStatus,
}

fn claim_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Claim", id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/claims
pub async fn create_claim(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ValidatedJson(input): ValidatedJson<CreateClaimRequest>,
) -> AppResult<ApiResponse<Claim>> {
    FoundItemRepo::find_by_id(&state.pool, input.found_item_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "FoundItem",
                id: input.found_item_id,
            })
        })?;

    if let Some(lost_item_id) = input.lost_item_id {
        LostItemRepo::find_owned(&state.pool, lost_item_id, auth.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFound {
                    entity: "LostItem",
                    id: lost_item_id,
                })
            })?;
    }

    let create = CreateClaim {
        found_item_id: input.found_item_id,
        lost_item_id: input.lost_item_id,
        distinguishing_features: input.distinguishing_features,
        lost_date: input.lost_date,
        proof_of_purchase: input.proof_of_purchase,
        photos: input.photos.unwrap_or_default(),
        ownership_docs: input.ownership_docs,
        detailed_loss_account: input.detailed_loss_account,
        matching_accessories: input.matching_accessories,
        security_features: input.security_features,
        third_party_confirmation: input.third_party_confirmation,
    };
    let claim = ClaimRepo::create(&state.pool, auth.user_id, &create).await?;

    tracing::info!(
        claim_id = claim.id,
        found_item_id = claim.found_item_id,
        lost_item_id = ?claim.lost_item_id,
        user_id = auth.user_id,
        "Claim created"
    );

    Ok(ApiResponse::created("Claim created successfully", claim))
}

/// GET /api/claims
///
/// Every claim with its found item, for moderation.
pub async fn list_claims(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<ApiResponse<Vec<ClaimDetail>>> {
    let claims = ClaimRepo::list_details(&state.pool, None).await?;
    Ok(ApiResponse::ok("Claims retrieved successfully", claims))
}

/// GET /api/my-claims
pub async fn my_claims(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> AppResult<ApiResponse<Vec<ClaimDetail>>> {
    let claims = ClaimRepo::list_details(&state.pool, Some(auth.user_id)).await?;
    Ok(ApiResponse::ok("Claims retrieved successfully", claims))
}

/// PUT /api/claims/{claimId}
pub async fn update_claim_status(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    ApiPath(claim_id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateClaimStatusRequest>,
) -> AppResult<ApiResponse<Claim>> {
    let claim = ClaimRepo::update_status(&state.pool, claim_id, input.status)
        .await?
        .ok_or_else(|| claim_not_found(claim_id))?;

    tracing::info!(
        claim_id,
        user_id = auth.user_id,
        status = %input.status,
        "Claim status updated"
    );

    Ok(ApiResponse::ok("Claim updated successfully", claim))
}

/// DELETE /api/claims/{claimId}
///
/// Removes the claim together with its found item and linked lost item.
pub async fn delete_claim(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(claim_id): ApiPath<DbId>,
) -> AppResult<ApiResponse<Claim>> {
    let claim = ClaimRepo::delete_cascade(&state.pool, claim_id)
        .await?
        .ok_or_else(|| claim_not_found(claim_id))?;

    tracing::info!(
        claim_id,
        found_item_id = claim.found_item_id,
        lost_item_id = ?claim.lost_item_id,
        admin_id = admin.user_id,
        "Claim deleted with its items"
    );

    Ok(ApiResponse::ok("Claim deleted successfully", claim))
}
