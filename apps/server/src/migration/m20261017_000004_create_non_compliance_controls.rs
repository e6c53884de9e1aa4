//! Migration: Create non_compliance_controls table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NonComplianceControls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NonComplianceControls::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NonComplianceControls::Number)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(NonComplianceControls::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NonComplianceControls::DetectedDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(NonComplianceControls::CorrectiveMeasure).text())
                    .col(ColumnDef::new(NonComplianceControls::Responsible).string_len(255))
                    .col(
                        ColumnDef::new(NonComplianceControls::Status)
                            .string_len(20)
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(NonComplianceControls::Effectiveness)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(NonComplianceControls::DepartmentId).uuid())
                    .col(ColumnDef::new(NonComplianceControls::SubprojectId).uuid())
                    .col(
                        ColumnDef::new(NonComplianceControls::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NonComplianceControls::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                NonComplianceControls::Table,
                                NonComplianceControls::DepartmentId,
                            )
                            .to(ReferenceRecords::Table, ReferenceRecords::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                NonComplianceControls::Table,
                                NonComplianceControls::SubprojectId,
                            )
                            .to(ReferenceRecords::Table, ReferenceRecords::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_non_compliance_controls_status")
                    .table(NonComplianceControls::Table)
                    .col(NonComplianceControls::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NonComplianceControls::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReferenceRecords {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum NonComplianceControls {
    Table,
    Id,
    Number,
    Description,
    DetectedDate,
    CorrectiveMeasure,
    Responsible,
    Status,
    Effectiveness,
    DepartmentId,
    SubprojectId,
    CreatedAt,
    UpdatedAt,
}
