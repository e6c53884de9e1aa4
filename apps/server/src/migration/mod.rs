//! SeaORM database migrations.
//!
//! Schemas are written with the backend-neutral schema builder so the same
//! migrations run against PostgreSQL in deployment and SQLite in tests.

pub use sea_orm_migration::prelude::*;

mod m20261017_000001_create_reference_records;
mod m20261017_000002_create_incident_reports;
mod m20261017_000003_create_complaint_records;
mod m20261017_000004_create_non_compliance_controls;
mod m20261017_000005_create_legal_requirements;
mod m20261017_000006_create_training_plans;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_create_reference_records::Migration),
            Box::new(m20261017_000002_create_incident_reports::Migration),
            Box::new(m20261017_000003_create_complaint_records::Migration),
            Box::new(m20261017_000004_create_non_compliance_controls::Migration),
            Box::new(m20261017_000005_create_legal_requirements::Migration),
            Box::new(m20261017_000006_create_training_plans::Migration),
        ]
    }
}
