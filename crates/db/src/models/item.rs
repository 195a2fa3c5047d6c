//! Types shared by found and lost item listings.

use lostfound_core::search::{ItemSortField, Pagination, SortOrder};
use lostfound_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Contact details stored as JSONB on item rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Conjunctive filter plus paging for item search.
///
/// `search_term` matches name, description or location; the remaining
/// filters are ANDed on top.
#[derive(Debug, Clone, Default)]
pub struct ItemSearch {
    pub search_term: Option<String>,
    pub name: Option<String>,
    pub category_id: Option<DbId>,
    pub location: Option<String>,
    pub pagination: Pagination,
    pub sort_field: ItemSortField,
    pub sort_order: SortOrder,
}
