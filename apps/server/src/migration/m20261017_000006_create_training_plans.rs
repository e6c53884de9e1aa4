//! Migration: Create training_plans table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrainingPlans::Title).string_len(255).not_null())
                    .col(ColumnDef::new(TrainingPlans::Objective).text())
                    .col(ColumnDef::new(TrainingPlans::Trainer).string_len(255))
                    .col(ColumnDef::new(TrainingPlans::PlannedDate).date().not_null())
                    .col(ColumnDef::new(TrainingPlans::CompletedDate).date())
                    .col(
                        ColumnDef::new(TrainingPlans::Status)
                            .string_len(20)
                            .not_null()
                            .default("planned"),
                    )
                    .col(ColumnDef::new(TrainingPlans::DepartmentId).uuid())
                    .col(ColumnDef::new(TrainingPlans::PositionId).uuid())
                    .col(
                        ColumnDef::new(TrainingPlans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingPlans::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TrainingPlans::Table, TrainingPlans::DepartmentId)
                            .to(ReferenceRecords::Table, ReferenceRecords::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TrainingPlans::Table, TrainingPlans::PositionId)
                            .to(ReferenceRecords::Table, ReferenceRecords::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReferenceRecords {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TrainingPlans {
    Table,
    Id,
    Title,
    Objective,
    Trainer,
    PlannedDate,
    CompletedDate,
    Status,
    DepartmentId,
    PositionId,
    CreatedAt,
    UpdatedAt,
}
