//! Error types for the starfav backend.
//!
//! Storage failures (unique-constraint violations, foreign-key violations,
//! missing rows) surface as [`sea_orm::DbErr`] and propagate unchanged to the
//! caller; this layer performs no recovery or retry.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
