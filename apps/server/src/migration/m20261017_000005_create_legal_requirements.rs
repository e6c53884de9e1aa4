//! Migration: Create legal_requirements table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LegalRequirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LegalRequirements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LegalRequirements::Number)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(LegalRequirements::Title).string_len(500).not_null())
                    .col(ColumnDef::new(LegalRequirements::IssuingBody).string_len(255))
                    .col(
                        ColumnDef::new(LegalRequirements::EffectiveDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LegalRequirements::Status)
                            .string_len(20)
                            .not_null()
                            .default("in_force"),
                    )
                    .col(ColumnDef::new(LegalRequirements::FileUrl).string_len(1000))
                    .col(ColumnDef::new(LegalRequirements::Description).text())
                    .col(
                        ColumnDef::new(LegalRequirements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LegalRequirements::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LegalRequirements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LegalRequirements {
    Table,
    Id,
    Number,
    Title,
    IssuingBody,
    EffectiveDate,
    Status,
    FileUrl,
    Description,
    CreatedAt,
    UpdatedAt,
}
