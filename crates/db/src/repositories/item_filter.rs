//! WHERE / ORDER BY construction shared by found and lost item search.

use lostfound_core::search::{contains_pattern, ItemSortField};
use lostfound_core::types::DbId;

use crate::models::item::ItemSearch;

/// A rendered filter plus the values to bind, in placeholder order.
pub(crate) struct ItemFilter {
    pub where_clause: String,
    /// Index of the first placeholder after the filter's own binds.
    pub next_idx: u32,
    pub term: Option<String>,
    pub name: Option<String>,
    pub category_id: Option<DbId>,
    pub location: Option<String>,
}

impl ItemFilter {
    /// Build the conjunctive filter for `search` against table alias `alias`.
    pub fn build(alias: &str, search: &ItemSearch) -> Self {
        let term = contains_pattern(search.search_term.as_deref());
        let name = contains_pattern(search.name.as_deref());
        let location = contains_pattern(search.location.as_deref());
        let category_id = search.category_id;

        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if term.is_some() {
            conditions.push(format!(
                "({alias}.name ILIKE ${bind_idx} \
                 OR {alias}.description ILIKE ${bind_idx} \
                 OR {alias}.location ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if name.is_some() {
            conditions.push(format!("{alias}.name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if category_id.is_some() {
            conditions.push(format!("{alias}.category_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if location.is_some() {
            conditions.push(format!("{alias}.location ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        Self {
            where_clause,
            next_idx: bind_idx,
            term,
            name,
            category_id,
            location,
        }
    }
}

/// Render a stable ORDER BY: the requested key, then `id` in the same
/// direction so equal keys never shuffle between pages.
pub(crate) fn order_by(alias: &str, date_column: &str, search: &ItemSearch) -> String {
    let column = match search.sort_field {
        ItemSortField::CreatedAt => "created_at",
        ItemSortField::Name => "name",
        ItemSortField::Location => "location",
        ItemSortField::EventDate => date_column,
    };
    let dir = search.sort_order.as_sql();
    format!("ORDER BY {alias}.{column} {dir} NULLS LAST, {alias}.id {dir}")
}

/// Bind an [`ItemFilter`]'s values onto a query in placeholder order.
macro_rules! bind_item_filter {
    ($query:expr, $filter:expr) => {{
        let mut q = $query;
        if let Some(ref term) = $filter.term {
            q = q.bind(term.clone());
        }
        if let Some(ref name) = $filter.name {
            q = q.bind(name.clone());
        }
        if let Some(category_id) = $filter.category_id {
            q = q.bind(category_id);
        }
        if let Some(ref location) = $filter.location {
            q = q.bind(location.clone());
        }
        q
    }};
}

pub(crate) use bind_item_filter;
