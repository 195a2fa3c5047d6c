//! Repository for the `lost_items` table.

use lostfound_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::item::ItemSearch;
use crate::models::lost_item::{CreateLostItem, LostItem, LostItemDetail, UpdateLostItem};
use crate::repositories::item_filter::{bind_item_filter, order_by, ItemFilter};

const COLUMNS: &str = "id, user_id, category_id, name, description, location, date_lost, \
                       is_found, contact_info, images, created_at, updated_at";

const DETAIL_COLUMNS: &str = "l.id, l.user_id, l.category_id, l.name, l.description, \
                              l.location, l.date_lost, l.is_found, l.contact_info, l.images, \
                              l.created_at, l.updated_at, u.name AS reporter_name, \
                              u.email AS reporter_email, c.name AS category_name";

const DETAIL_FROM: &str = "lost_items l
     JOIN users u ON u.id = l.user_id
     JOIN lost_item_categories c ON c.id = l.category_id";

/// Provides CRUD and search operations for lost items.
pub struct LostItemRepo;

impl LostItemRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateLostItem,
    ) -> Result<LostItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO lost_items
                (user_id, category_id, name, description, location, date_lost,
                 is_found, contact_info, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LostItem>(&query)
            .bind(user_id)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.location.as_deref())
            .bind(input.date_lost)
            .bind(input.is_found)
            .bind(Json(&input.contact_info))
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LostItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lost_items WHERE id = $1");
        sqlx::query_as::<_, LostItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a lost item only if `user_id` reported it.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<LostItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lost_items WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, LostItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LostItemDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM} WHERE l.id = $1");
        sqlx::query_as::<_, LostItemDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Filtered, sorted, paged search. The total is counted under the same
    /// filter as the page.
    pub async fn search(
        pool: &PgPool,
        search: &ItemSearch,
    ) -> Result<(Vec<LostItemDetail>, i64), sqlx::Error> {
        let filter = ItemFilter::build("l", search);
        let order = order_by("l", "date_lost", search);

        let page_query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM} {where_clause} {order}
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            where_clause = filter.where_clause,
            limit_idx = filter.next_idx,
            offset_idx = filter.next_idx + 1,
        );
        let items = bind_item_filter!(sqlx::query_as::<_, LostItemDetail>(&page_query), filter)
            .bind(search.pagination.limit)
            .bind(search.pagination.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM lost_items l {}", filter.where_clause);
        let total = bind_item_filter!(sqlx::query_scalar::<_, i64>(&count_query), filter)
            .fetch_one(pool)
            .await?;

        Ok((items, total))
    }

    /// List items reported by `user_id`, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<LostItemDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM}
             WHERE l.user_id = $1
             ORDER BY l.created_at DESC, l.id DESC"
        );
        sqlx::query_as::<_, LostItemDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<LostItemDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM}
             ORDER BY l.created_at DESC, l.id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, LostItemDetail>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update an item owned by `user_id`. Only non-`None` fields are applied.
    /// Returns `None` when the item is missing or owned by someone else.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateLostItem,
    ) -> Result<Option<LostItem>, sqlx::Error> {
        let query = format!(
            "UPDATE lost_items SET
                category_id = COALESCE($3, category_id),
                name = COALESCE($4, name),
                description = COALESCE($5, description),
                location = COALESCE($6, location),
                date_lost = COALESCE($7, date_lost),
                is_found = COALESCE($8, is_found),
                contact_info = COALESCE($9, contact_info),
                images = COALESCE($10, images)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LostItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.category_id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.location.as_deref())
            .bind(input.date_lost)
            .bind(input.is_found)
            .bind(input.contact_info.as_ref().map(Json))
            .bind(input.images.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Set the owner-controlled `is_found` flag.
    pub async fn set_is_found_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        is_found: bool,
    ) -> Result<Option<LostItem>, sqlx::Error> {
        let query = format!(
            "UPDATE lost_items SET is_found = $3
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LostItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(is_found)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item owned by `user_id`, returning the removed row.
    ///
    /// Claims that referenced it keep existing with `lost_item_id` set to NULL.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<LostItem>, sqlx::Error> {
        let query =
            format!("DELETE FROM lost_items WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, LostItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
