//! OHS compliance server library.
//!
//! Exposes the configuration, persistence and HTTP layers so the binary and
//! the integration tests assemble the same application.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
