//! Claim entity model and DTOs.

use lostfound_core::status::ClaimStatus;
use lostfound_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::found_item::FoundItemDetail;

/// A row from the `claims` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: DbId,
    pub user_id: DbId,
    pub found_item_id: DbId,
    pub lost_item_id: Option<DbId>,
    pub distinguishing_features: String,
    pub lost_date: Timestamp,
    pub proof_of_purchase: Option<String>,
    pub photos: Vec<String>,
    pub ownership_docs: Option<String>,
    pub detailed_loss_account: Option<String>,
    pub matching_accessories: Option<String>,
    pub security_features: Option<String>,
    pub third_party_confirmation: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ClaimStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A claim with the found item it targets (including reporter and category),
/// as shown in moderation and "my claims" listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetail {
    #[serde(flatten)]
    pub claim: Claim,
    pub found_item: FoundItemDetail,
}

/// DTO for filing a claim. Status is always the column default (`pending`).
#[derive(Debug, Clone)]
pub struct CreateClaim {
    pub found_item_id: DbId,
    pub lost_item_id: Option<DbId>,
    pub distinguishing_features: String,
    pub lost_date: Timestamp,
    pub proof_of_purchase: Option<String>,
    pub photos: Vec<String>,
    pub ownership_docs: Option<String>,
    pub detailed_loss_account: Option<String>,
    pub matching_accessories: Option<String>,
    pub security_features: Option<String>,
    pub third_party_confirmation: Option<String>,
}
