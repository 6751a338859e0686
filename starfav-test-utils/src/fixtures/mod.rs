//! Database insertion helpers and in-memory model factories for tests.

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
