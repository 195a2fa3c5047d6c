//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-statement writes open
//! their own transaction.

pub mod category_repo;
pub mod claim_repo;
pub mod found_item_repo;
mod item_filter;
pub mod lost_item_repo;
pub mod metrics_repo;
pub mod profile_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use claim_repo::ClaimRepo;
pub use found_item_repo::FoundItemRepo;
pub use lost_item_repo::LostItemRepo;
pub use metrics_repo::MetricsRepo;
pub use profile_repo::ProfileRepo;
pub use user_repo::UserRepo;
