//! Service layer producing external representations.
//!
//! Services coordinate repositories over a shared [`sea_orm::DatabaseConnection`]
//! and map entity models to the DTOs in [`crate::model`]. They add no
//! validation or business rules beyond what the database constraints enforce.

pub mod catalog;
pub mod favorite;
pub mod user;
