pub mod admin;
pub mod categories;
pub mod claims;
pub mod found_items;
pub mod items;
pub mod lost_items;
pub mod metrics;
pub mod profile;
pub mod users;
