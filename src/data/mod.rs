//! Data access layer repositories.
//!
//! Repositories wrap database operations for one table each and are generic
//! over [`sea_orm::ConnectionTrait`], so callers hand in whichever connection
//! or transaction the operation should run on. Storage errors propagate
//! unchanged.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
