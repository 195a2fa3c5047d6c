//! Domain types shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod roles;
pub mod search;
pub mod status;
pub mod types;
