//! Migration: Create incident reporting tables.
//!
//! Investigation participants and corrective actions are standalone records
//! linked to incident reports through join tables, so removing a report only
//! removes the links.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvestigationParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvestigationParticipants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InvestigationParticipants::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(InvestigationParticipants::Role).string_len(255))
                    .col(ColumnDef::new(InvestigationParticipants::PositionId).uuid())
                    .col(
                        ColumnDef::new(InvestigationParticipants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestigationParticipants::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                InvestigationParticipants::Table,
                                InvestigationParticipants::PositionId,
                            )
                            .to(ReferenceRecords::Table, ReferenceRecords::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CorrectiveActions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CorrectiveActions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CorrectiveActions::Description).text().not_null())
                    .col(ColumnDef::new(CorrectiveActions::Responsible).string_len(255))
                    .col(ColumnDef::new(CorrectiveActions::DueDate).date())
                    .col(
                        ColumnDef::new(CorrectiveActions::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(CorrectiveActions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CorrectiveActions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IncidentReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IncidentReports::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IncidentReports::Name).string_len(255).not_null())
                    .col(ColumnDef::new(IncidentReports::Role).string_len(255).not_null())
                    .col(ColumnDef::new(IncidentReports::IncidentDate).date().not_null())
                    .col(ColumnDef::new(IncidentReports::IncidentTime).time())
                    .col(
                        ColumnDef::new(IncidentReports::Location)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(IncidentReports::Description).text().not_null())
                    .col(ColumnDef::new(IncidentReports::ImmediateCause).text())
                    .col(ColumnDef::new(IncidentReports::RootCause).text())
                    .col(ColumnDef::new(IncidentReports::DepartmentId).uuid())
                    .col(ColumnDef::new(IncidentReports::SubprojectId).uuid())
                    .col(
                        ColumnDef::new(IncidentReports::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IncidentReports::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(IncidentReports::Table, IncidentReports::DepartmentId)
                            .to(ReferenceRecords::Table, ReferenceRecords::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(IncidentReports::Table, IncidentReports::SubprojectId)
                            .to(ReferenceRecords::Table, ReferenceRecords::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_incident_reports_subproject_id")
                    .table(IncidentReports::Table)
                    .col(IncidentReports::SubprojectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InvolvedPersons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvolvedPersons::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InvolvedPersons::IncidentReportId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(InvolvedPersons::Name).string_len(255).not_null())
                    .col(ColumnDef::new(InvolvedPersons::Position).string_len(255))
                    .col(ColumnDef::new(InvolvedPersons::Contact).string_len(255))
                    .col(ColumnDef::new(InvolvedPersons::InjuryDescription).text())
                    .col(
                        ColumnDef::new(InvolvedPersons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(InvolvedPersons::Table, InvolvedPersons::IncidentReportId)
                            .to(IncidentReports::Table, IncidentReports::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IncidentReportParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IncidentReportParticipants::IncidentReportId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IncidentReportParticipants::ParticipantId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(IncidentReportParticipants::IncidentReportId)
                            .col(IncidentReportParticipants::ParticipantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                IncidentReportParticipants::Table,
                                IncidentReportParticipants::IncidentReportId,
                            )
                            .to(IncidentReports::Table, IncidentReports::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                IncidentReportParticipants::Table,
                                IncidentReportParticipants::ParticipantId,
                            )
                            .to(
                                InvestigationParticipants::Table,
                                InvestigationParticipants::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IncidentReportCorrectiveActions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IncidentReportCorrectiveActions::IncidentReportId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IncidentReportCorrectiveActions::CorrectiveActionId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(IncidentReportCorrectiveActions::IncidentReportId)
                            .col(IncidentReportCorrectiveActions::CorrectiveActionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                IncidentReportCorrectiveActions::Table,
                                IncidentReportCorrectiveActions::IncidentReportId,
                            )
                            .to(IncidentReports::Table, IncidentReports::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                IncidentReportCorrectiveActions::Table,
                                IncidentReportCorrectiveActions::CorrectiveActionId,
                            )
                            .to(CorrectiveActions::Table, CorrectiveActions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(IncidentReportCorrectiveActions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(IncidentReportParticipants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(InvolvedPersons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IncidentReports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CorrectiveActions::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(InvestigationParticipants::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ReferenceRecords {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum InvestigationParticipants {
    Table,
    Id,
    Name,
    Role,
    PositionId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CorrectiveActions {
    Table,
    Id,
    Description,
    Responsible,
    DueDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum IncidentReports {
    Table,
    Id,
    Name,
    Role,
    IncidentDate,
    IncidentTime,
    Location,
    Description,
    ImmediateCause,
    RootCause,
    DepartmentId,
    SubprojectId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InvolvedPersons {
    Table,
    Id,
    IncidentReportId,
    Name,
    Position,
    Contact,
    InjuryDescription,
    CreatedAt,
}

#[derive(DeriveIden)]
enum IncidentReportParticipants {
    Table,
    IncidentReportId,
    ParticipantId,
}

#[derive(DeriveIden)]
enum IncidentReportCorrectiveActions {
    Table,
    IncidentReportId,
    CorrectiveActionId,
}
