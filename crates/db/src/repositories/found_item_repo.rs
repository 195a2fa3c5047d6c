//! Repository for the `found_items` table.
//!
//! Update and delete are ownership-scoped: the predicate is `id AND user_id`,
//! so a non-owner affects zero rows exactly as if the item did not exist.

use lostfound_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::found_item::{CreateFoundItem, FoundItem, FoundItemDetail, UpdateFoundItem};
use crate::models::item::ItemSearch;
use crate::repositories::item_filter::{bind_item_filter, order_by, ItemFilter};

/// Column list for `found_items` queries.
const COLUMNS: &str = "\
    id, user_id, category_id, name, description, location, \
    date_found, contact_info, images, created_at, updated_at";

/// Columns for [`FoundItemDetail`]: the item (alias `f`) joined with its
/// reporter (`u`) and category (`c`).
const DETAIL_COLUMNS: &str = "\
    f.id, f.user_id, f.category_id, f.name, f.description, f.location, \
    f.date_found, f.contact_info, f.images, f.created_at, f.updated_at, \
    u.name AS reporter_name, u.email AS reporter_email, c.name AS category_name";

const DETAIL_FROM: &str = "\
    found_items f \
    JOIN users u ON u.id = f.user_id \
    JOIN found_item_categories c ON c.id = f.category_id";

/// Provides CRUD and search operations for found items.
pub struct FoundItemRepo;

impl FoundItemRepo {
    /// Record a found item reported by `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateFoundItem,
    ) -> Result<FoundItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO found_items \
                (user_id, category_id, name, description, location, date_found, contact_info, images) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FoundItem>(&query)
            .bind(user_id)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.date_found)
            .bind(Json(&input.contact_info))
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find a found item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FoundItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM found_items WHERE id = $1");
        sqlx::query_as::<_, FoundItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a found item with its reporter and category.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FoundItemDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM} WHERE f.id = $1");
        sqlx::query_as::<_, FoundItemDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch details for a set of IDs in one round-trip. Missing IDs are
    /// silently absent from the result.
    pub async fn list_details_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<FoundItemDetail>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM} WHERE f.id = ANY($1)");
        sqlx::query_as::<_, FoundItemDetail>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Filtered, sorted, paged search. Returns the page and the total number
    /// of rows matching the same filter.
    pub async fn search(
        pool: &PgPool,
        search: &ItemSearch,
    ) -> Result<(Vec<FoundItemDetail>, i64), sqlx::Error> {
        let filter = ItemFilter::build("f", search);
        let order = order_by("f", "date_found", search);

        let page_query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM} {where_clause} {order} \
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            where_clause = filter.where_clause,
            limit_idx = filter.next_idx,
            offset_idx = filter.next_idx + 1,
        );
        let items = bind_item_filter!(sqlx::query_as::<_, FoundItemDetail>(&page_query), filter)
            .bind(search.pagination.limit)
            .bind(search.pagination.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!(
            "SELECT COUNT(*) FROM found_items f {}",
            filter.where_clause
        );
        let total: i64 = bind_item_filter!(sqlx::query_scalar::<_, i64>(&count_query), filter)
            .fetch_one(pool)
            .await?;

        Ok((items, total))
    }

    /// List items reported by `user_id`, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<FoundItemDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM} \
             WHERE f.user_id = $1 ORDER BY f.created_at DESC, f.id DESC"
        );
        sqlx::query_as::<_, FoundItemDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently reported items.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<FoundItemDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM} \
             ORDER BY f.created_at DESC, f.id DESC LIMIT $1"
        );
        sqlx::query_as::<_, FoundItemDetail>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update an item owned by `user_id`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the item does not exist or belongs to someone else.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateFoundItem,
    ) -> Result<Option<FoundItem>, sqlx::Error> {
        let query = format!(
            "UPDATE found_items SET \
                category_id = COALESCE($3, category_id), \
                name = COALESCE($4, name), \
                description = COALESCE($5, description), \
                location = COALESCE($6, location), \
                date_found = COALESCE($7, date_found), \
                contact_info = COALESCE($8, contact_info), \
                images = COALESCE($9, images) \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FoundItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.category_id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.location.as_deref())
            .bind(input.date_found)
            .bind(input.contact_info.as_ref().map(Json))
            .bind(input.images.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete an item owned by `user_id`, returning the removed row.
    ///
    /// Claims against the item are removed with it (`ON DELETE CASCADE`).
    /// Returns `None` if the item does not exist or belongs to someone else.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<FoundItem>, sqlx::Error> {
        let query = format!(
            "DELETE FROM found_items WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FoundItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
