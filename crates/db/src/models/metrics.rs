//! Aggregate counters for the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteMetrics {
    /// Found items plus lost items.
    pub total_reported: i64,
    pub total_lost: i64,
    pub claims: i64,
    /// Lost items whose owner marked them as found.
    pub found_resolved: i64,
}
