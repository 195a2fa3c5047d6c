//! Dashboard counters.

use sqlx::PgPool;

use crate::models::metrics::WebsiteMetrics;

pub struct MetricsRepo;

impl MetricsRepo {
    /// All four counters from a single statement so they describe the same
    /// snapshot.
    pub async fn website_metrics(pool: &PgPool) -> Result<WebsiteMetrics, sqlx::Error> {
        sqlx::query_as::<_, WebsiteMetrics>(
            "SELECT
                (SELECT COUNT(*) FROM found_items) + (SELECT COUNT(*) FROM lost_items)
                    AS total_reported,
                (SELECT COUNT(*) FROM lost_items) AS total_lost,
                (SELECT COUNT(*) FROM claims) AS claims,
                (SELECT COUNT(*) FROM lost_items WHERE is_found) AS found_resolved",
        )
        .fetch_one(pool)
        .await
    }
}
