//! Repository for the `users` table.

use lostfound_core::status::UserStatus;
use lostfound_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{UpsertProfile, UserProfile};
use crate::models::user::{CreateUser, User};
use crate::repositories::profile_repo;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, name, email, password_hash, role, status, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role.as_str())
            .fetch_one(pool)
            .await
    }

    /// Insert a user and their profile in one transaction.
    ///
    /// A duplicate email fails the user insert and nothing is written.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
        profile: &UpsertProfile,
    ) -> Result<(User, UserProfile), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_query = format!(
            "INSERT INTO users (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&user_query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role.as_str())
            .fetch_one(&mut *tx)
            .await?;

        let profile_query = format!(
            "INSERT INTO user_profiles (user_id, bio, age, profile_picture)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            profile_repo::COLUMNS
        );
        let profile = sqlx::query_as::<_, UserProfile>(&profile_query)
            .bind(user.id)
            .bind(profile.bio.as_deref())
            .bind(profile.age)
            .bind(profile.profile_picture.as_deref())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((user, profile))
    }

    /// Create `input` unless a user with the same email already exists.
    ///
    /// Returns `None` when the email was taken; the existing row is left
    /// untouched.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &CreateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_users_email DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a login identifier that may be either a name or an email.
    ///
    /// Names are not unique, so an email match wins, then the oldest account.
    pub async fn find_by_name_or_email(
        pool: &PgPool,
        identifier: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE email = $1 OR name = $1
             ORDER BY (email = $1) DESC, id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(identifier)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Overwrite a user's moderation status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: UserStatus,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("UPDATE users SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a user. Profile, reported items and claims go with it via
    /// `ON DELETE CASCADE`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
