//! Item category reference data.

use lostfound_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `found_item_categories` or `lost_item_categories`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Which of the two category tables an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Found,
    Lost,
}

impl CategoryKind {
    pub fn table(&self) -> &'static str {
        match self {
            Self::Found => "found_item_categories",
            Self::Lost => "lost_item_categories",
        }
    }
}
