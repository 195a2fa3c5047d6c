//! Repository for the two item category tables.

use sqlx::PgPool;

use crate::models::category::{Category, CategoryKind};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Create and list categories for found or lost items.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category. Duplicate names violate `uq_*_categories_name`.
    pub async fn create(
        pool: &PgPool,
        kind: CategoryKind,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING {COLUMNS}",
            kind.table()
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// List all categories of `kind` alphabetically.
    pub async fn list(pool: &PgPool, kind: CategoryKind) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} ORDER BY name", kind.table());
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}
