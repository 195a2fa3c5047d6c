//! Shared query parameter types for API handlers.

use lostfound_core::search::{ItemSortField, Pagination, SortOrder};
use lostfound_core::types::DbId;
use lostfound_db::models::item::ItemSearch;
use serde::Deserialize;

/// Search, sort and paging parameters for found/lost item listings.
///
/// `name` also accepts the per-kind aliases `foundItemName` and `lostItemName`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSearchParams {
    pub search_term: Option<String>,
    pub category_id: Option<DbId>,
    pub location: Option<String>,
    #[serde(alias = "foundItemName", alias = "lostItemName")]
    pub name: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ItemSearchParams {
    /// Apply defaults, clamping and the sort whitelist.
    pub fn into_search(self) -> ItemSearch {
        ItemSearch {
            pagination: Pagination::new(self.page, self.limit),
            sort_field: ItemSortField::parse(self.sort_by.as_deref()),
            sort_order: SortOrder::parse(self.sort_order.as_deref()),
            search_term: self.search_term,
            name: self.name,
            category_id: self.category_id,
            location: self.location,
        }
    }
}

/// `?limit=` for the recently-reported listings.
#[derive(Debug, Default, Deserialize)]
pub struct RecentParams {
    pub limit: Option<i64>,
}

pub const DEFAULT_RECENT_LIMIT: i64 = 10;

impl RecentParams {
    /// Requested limit clamped to `1..=MAX_LIMIT`, default 10.
    pub fn limit(&self) -> i64 {
        match self.limit {
            Some(l) if l >= 1 => l.min(lostfound_core::search::MAX_LIMIT),
            _ => DEFAULT_RECENT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_first_page_newest_first() {
        let search = ItemSearchParams::default().into_search();
        assert_eq!(search.pagination, Pagination { page: 1, limit: 10 });
        assert_eq!(search.sort_field, ItemSortField::CreatedAt);
        assert_eq!(search.sort_order, SortOrder::Desc);
    }

    #[test]
    fn item_name_aliases_map_to_name() {
        let params: ItemSearchParams =
            serde_json::from_value(serde_json::json!({ "lostItemName": "keys" })).unwrap();
        assert_eq!(params.name.as_deref(), Some("keys"));

        let params: ItemSearchParams = serde_json::from_value(serde_json::json!({
            "foundItemName": "wallet",
            "sortBy": "dateFound",
            "sortOrder": "asc",
            "page": 3,
            "limit": 500
        }))
        .unwrap();
        let search = params.into_search();
        assert_eq!(search.name.as_deref(), Some("wallet"));
        assert_eq!(search.sort_field, ItemSortField::EventDate);
        assert_eq!(search.sort_order, SortOrder::Asc);
        assert_eq!(search.pagination, Pagination { page: 3, limit: 100 });
    }

    #[test]
    fn recent_limit_is_clamped() {
        assert_eq!(RecentParams { limit: None }.limit(), 10);
        assert_eq!(RecentParams { limit: Some(0) }.limit(), 10);
        assert_eq!(RecentParams { limit: Some(3) }.limit(), 3);
        assert_eq!(RecentParams { limit: Some(9999) }.limit(), 100);
    }
}
