//! Migration: Create reference_records table.
//!
//! Holds every reference data kind (departments, positions, subprojects,
//! toolbox talks, environmental factors, risks and impacts, acceptance
//! confirmations) discriminated by `kind`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReferenceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReferenceRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReferenceRecords::Kind).string_len(40).not_null())
                    .col(ColumnDef::new(ReferenceRecords::Name).string_len(255).not_null())
                    .col(ColumnDef::new(ReferenceRecords::Code).string_len(50))
                    .col(ColumnDef::new(ReferenceRecords::Description).text())
                    .col(
                        ColumnDef::new(ReferenceRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReferenceRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always per kind, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_reference_records_kind_created_at")
                    .table(ReferenceRecords::Table)
                    .col(ReferenceRecords::Kind)
                    .col(ReferenceRecords::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReferenceRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReferenceRecords {
    Table,
    Id,
    Kind,
    Name,
    Code,
    Description,
    CreatedAt,
    UpdatedAt,
}
