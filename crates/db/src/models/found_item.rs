//! Found item model and DTOs.

use lostfound_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

use super::item::ContactInfo;

/// A row from the `found_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItem {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_found: Timestamp,
    pub contact_info: Json<ContactInfo>,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Found item joined with its reporter and category.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItemDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: FoundItem,
    pub reporter_name: String,
    pub reporter_email: String,
    pub category_name: String,
}

/// DTO for reporting a found item. The reporter comes from the auth context.
#[derive(Debug, Clone)]
pub struct CreateFoundItem {
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_found: Timestamp,
    pub contact_info: ContactInfo,
    pub images: Vec<String>,
}

/// DTO for updating a found item. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateFoundItem {
    pub category_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date_found: Option<Timestamp>,
    pub contact_info: Option<ContactInfo>,
    pub images: Option<Vec<String>>,
}
