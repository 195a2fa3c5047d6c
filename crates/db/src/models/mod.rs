//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - An update DTO (all `Option` fields) for patches

pub mod category;
pub mod claim;
pub mod found_item;
pub mod item;
pub mod lost_item;
pub mod metrics;
pub mod profile;
pub mod user;
