//! Persistence backend for a favorites application.
//!
//! Users mark characters and planets from a reference catalog as favorites.
//! This crate owns the relational schema (via the `entity` and `migration`
//! workspace members), repository-style data access over an explicit
//! connection handle, and the services that produce stable, transport-safe
//! representations of each entity. HTTP routing, request validation, and
//! authentication live in an external route layer that consumes this crate.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
