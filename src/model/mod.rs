//! Transport-safe representations of persisted entities.
//!
//! DTOs in this module define the stable external contract consumed by the
//! route layer. Sensitive columns (the user's password) never appear here.

pub mod catalog;
pub mod favorite;
pub mod user;
