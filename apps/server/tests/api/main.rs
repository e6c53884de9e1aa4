//! API integration test suite.
//!
//! Every test runs the full route tree against its own temporary SQLite
//! database with migrations applied.
//!
//! Run with: cargo test --test api

mod helpers;

mod test_complaints;
mod test_constraints;
mod test_health;
mod test_incident_reports;
mod test_reference_data;
mod test_registers;
