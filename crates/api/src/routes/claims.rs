//! Route definitions for claims.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::claims;
use crate::state::AppState;

/// Claim routes, mounted at the `/api` root.
///
/// ```text
/// POST   /claims              -> create_claim (auth)
/// GET    /claims              -> list_claims (admin)
/// GET    /my-claims           -> my_claims (auth)
/// PUT    /claims/{claimId}    -> update_claim_status (auth)
/// DELETE /claims/{claimId}    -> delete_claim (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/claims",
            get(claims::list_claims).post(claims::create_claim),
        )
        .route("/my-claims", get(claims::my_claims))
        .route(
            "/claims/{claim_id}",
            put(claims::update_claim_status).delete(claims::delete_claim),
        )
}
