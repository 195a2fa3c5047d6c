//! Repository for the `claims` table.

use std::collections::HashMap;

use lostfound_core::status::ClaimStatus;
use lostfound_core::types::DbId;
use sqlx::PgPool;

use crate::models::claim::{Claim, ClaimDetail, CreateClaim};
use crate::repositories::found_item_repo::FoundItemRepo;

const COLUMNS: &str = "\
    id, user_id, found_item_id, lost_item_id, distinguishing_features, lost_date, \
    proof_of_purchase, photos, ownership_docs, detailed_loss_account, \
    matching_accessories, security_features, third_party_confirmation, \
    status, created_at, updated_at";

/// Provides claim persistence and the cascading claim deletion.
pub struct ClaimRepo;

impl ClaimRepo {
    /// File a claim. `status` is left to the column default (`pending`).
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateClaim,
    ) -> Result<Claim, sqlx::Error> {
        let query = format!(
            "INSERT INTO claims
                (user_id, found_item_id, lost_item_id, distinguishing_features, lost_date,
                 proof_of_purchase, photos, ownership_docs, detailed_loss_account,
                 matching_accessories, security_features, third_party_confirmation)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(user_id)
            .bind(input.found_item_id)
            .bind(input.lost_item_id)
            .bind(&input.distinguishing_features)
            .bind(input.lost_date)
            .bind(input.proof_of_purchase.as_deref())
            .bind(&input.photos)
            .bind(input.ownership_docs.as_deref())
            .bind(input.detailed_loss_account.as_deref())
            .bind(input.matching_accessories.as_deref())
            .bind(input.security_features.as_deref())
            .bind(input.third_party_confirmation.as_deref())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Claim>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM claims WHERE id = $1");
        sqlx::query_as::<_, Claim>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Claims filed by `user_id`, newest first, without joins.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Claim>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM claims WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Claims with their found item, reporter and category, newest first.
    ///
    /// `None` lists every claim (moderation); `Some(user_id)` restricts the
    /// listing to one claimant.
    pub async fn list_details(
        pool: &PgPool,
        user_id: Option<DbId>,
    ) -> Result<Vec<ClaimDetail>, sqlx::Error> {
        let claims = match user_id {
            Some(user_id) => Self::list_for_user(pool, user_id).await?,
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM claims ORDER BY created_at DESC, id DESC");
                sqlx::query_as::<_, Claim>(&query).fetch_all(pool).await?
            }
        };

        // Pre-fetch every referenced found item in one query.
        let mut ids: Vec<DbId> = claims.iter().map(|c| c.found_item_id).collect();
        ids.sort_unstable();
        ids.dedup();
        let items: HashMap<DbId, _> = FoundItemRepo::list_details_by_ids(pool, &ids)
            .await?
            .into_iter()
            .map(|d| (d.item.id, d))
            .collect();

        // A found item deleted between the two queries takes its claims with
        // it, so such claims are dropped rather than returned half-joined.
        let details = claims
            .into_iter()
            .filter_map(|claim| {
                let found_item = items.get(&claim.found_item_id)?.clone();
                Some(ClaimDetail { claim, found_item })
            })
            .collect();

        Ok(details)
    }

    /// Overwrite the claim's status. Returns `None` if the claim does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ClaimStatus,
    ) -> Result<Option<Claim>, sqlx::Error> {
        let query = format!("UPDATE claims SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Claim>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a claim together with the found item it targets and the lost
    /// item it links, in one transaction.
    ///
    /// Returns the claim as it was before deletion, or `None` (with nothing
    /// changed) if it does not exist. Deleting the found item cascades to
    /// every claim against it, including sibling claims by other users.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<Option<Claim>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM claims WHERE id = $1 FOR UPDATE");
        let claim = match sqlx::query_as::<_, Claim>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        {
            Some(claim) => claim,
            None => {
                tx.rollback().await?;
                return Ok(None);
            }
        };

        if let Some(lost_item_id) = claim.lost_item_id {
            let removed = sqlx::query("DELETE FROM lost_items WHERE id = $1")
                .bind(lost_item_id)
                .execute(&mut *tx)
                .await?;
            tracing::debug!(
                claim_id = id,
                lost_item_id,
                rows = removed.rows_affected(),
                "Removed linked lost item",
            );
        }

        let removed = sqlx::query("DELETE FROM found_items WHERE id = $1")
            .bind(claim.found_item_id)
            .execute(&mut *tx)
            .await?;
        tracing::debug!(
            claim_id = id,
            found_item_id = claim.found_item_id,
            rows = removed.rows_affected(),
            "Removed claimed found item",
        );

        // Usually already gone through the found item cascade.
        sqlx::query("DELETE FROM claims WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(claim))
    }
}
