use axum::extract::State;
use lostfound_db::models::metrics::WebsiteMetrics;
use lostfound_db::repositories::MetricsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/website-metrics
pub async fn website_metrics(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<ApiResponse<WebsiteMetrics>> {
    let metrics = MetricsRepo::website_metrics(&state.pool).await?;
    Ok(ApiResponse::ok(
        "Website metrics retrieved successfully",
        metrics,
    ))
}
