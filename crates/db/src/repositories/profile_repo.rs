//! Repository for the `user_profiles` table.

use lostfound_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{UpdateIdentity, UpsertProfile, UserProfile};
use crate::models::user::User;
use crate::repositories::user_repo;

/// Column list for `user_profiles` queries.
pub(crate) const COLUMNS: &str =
    "id, user_id, bio, age, profile_picture, created_at, updated_at";

/// Provides read and upsert operations for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile belonging to `user_id`, if one has been created.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List every profile. Used to attach profiles to the admin user list
    /// without issuing one query per user.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles ORDER BY user_id");
        sqlx::query_as::<_, UserProfile>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update account name/email and insert-or-update the profile atomically.
    ///
    /// The profile write is a single `INSERT .. ON CONFLICT (user_id) DO UPDATE`
    /// so concurrent first-time updates cannot create two rows or fail on the
    /// unique constraint. `None` fields keep their stored values.
    ///
    /// Returns `None` (and writes nothing) if the user does not exist.
    pub async fn update_with_identity(
        pool: &PgPool,
        user_id: DbId,
        identity: &UpdateIdentity,
        profile: &UpsertProfile,
    ) -> Result<Option<(User, UserProfile)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email)
             WHERE id = $1
             RETURNING {}",
            user_repo::COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&user_query)
            .bind(user_id)
            .bind(identity.name.as_deref())
            .bind(identity.email.as_deref())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(user) = user else {
            tx.rollback().await?;
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO user_profiles (user_id, bio, age, profile_picture)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_user_profiles_user_id DO UPDATE SET
                bio = COALESCE(EXCLUDED.bio, user_profiles.bio),
                age = COALESCE(EXCLUDED.age, user_profiles.age),
                profile_picture = COALESCE(EXCLUDED.profile_picture, user_profiles.profile_picture)
             RETURNING {COLUMNS}"
        );
        let profile = sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(profile.bio.as_deref())
            .bind(profile.age)
            .bind(profile.profile_picture.as_deref())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some((user, profile)))
    }
}
