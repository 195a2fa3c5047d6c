//! User profile model and DTOs.

use lostfound_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_profiles` table. At most one per user.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub profile_picture: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Profile fields for insert-or-update. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct UpsertProfile {
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub profile_picture: Option<String>,
}

/// Account fields that may be changed alongside the profile.
#[derive(Debug, Default, Clone)]
pub struct UpdateIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}
