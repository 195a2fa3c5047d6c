//! Lost item model and DTOs.

use lostfound_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

use super::item::ContactInfo;

/// A row from the `lost_items` table.
///
/// `is_found` is set by the owner and is independent of any found item row.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItem {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub location: Option<String>,
    pub date_lost: Option<Timestamp>,
    pub is_found: bool,
    pub contact_info: Json<ContactInfo>,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lost item joined with its reporter and category.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItemDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: LostItem,
    pub reporter_name: String,
    pub reporter_email: String,
    pub category_name: String,
}

/// DTO for reporting a lost item.
#[derive(Debug, Clone)]
pub struct CreateLostItem {
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub location: Option<String>,
    pub date_lost: Option<Timestamp>,
    pub is_found: bool,
    pub contact_info: ContactInfo,
    pub images: Vec<String>,
}

/// DTO for updating a lost item. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateLostItem {
    pub category_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date_lost: Option<Timestamp>,
    pub is_found: Option<bool>,
    pub contact_info: Option<ContactInfo>,
    pub images: Option<Vec<String>>,
}
