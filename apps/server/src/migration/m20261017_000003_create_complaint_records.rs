//! Migration: Create complaints and claims registration tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhotoDocumentProofs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhotoDocumentProofs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PhotoDocumentProofs::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhotoDocumentProofs::ProofType)
                            .string_len(20)
                            .not_null()
                            .default("photo"),
                    )
                    .col(
                        ColumnDef::new(PhotoDocumentProofs::FileUrl)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PhotoDocumentProofs::Description).text())
                    .col(
                        ColumnDef::new(PhotoDocumentProofs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhotoDocumentProofs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ComplaintRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ComplaintRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ComplaintRecords::Number)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ComplaintRecords::Category)
                            .string_len(20)
                            .not_null()
                            .default("complaint"),
                    )
                    .col(
                        ColumnDef::new(ComplaintRecords::ComplainantName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ComplaintRecords::ReceivedDate).date().not_null())
                    .col(ColumnDef::new(ComplaintRecords::Description).text().not_null())
                    .col(ColumnDef::new(ComplaintRecords::ResolutionDescription).text())
                    .col(ColumnDef::new(ComplaintRecords::ResolutionDate).date())
                    .col(
                        ColumnDef::new(ComplaintRecords::Status)
                            .string_len(20)
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(ComplaintRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ComplaintRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ComplaintRecordProofs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ComplaintRecordProofs::ComplaintRecordId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ComplaintRecordProofs::ProofId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(ComplaintRecordProofs::ComplaintRecordId)
                            .col(ComplaintRecordProofs::ProofId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ComplaintRecordProofs::Table,
                                ComplaintRecordProofs::ComplaintRecordId,
                            )
                            .to(ComplaintRecords::Table, ComplaintRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ComplaintRecordProofs::Table, ComplaintRecordProofs::ProofId)
                            .to(PhotoDocumentProofs::Table, PhotoDocumentProofs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ComplaintRecordProofs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ComplaintRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PhotoDocumentProofs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PhotoDocumentProofs {
    Table,
    Id,
    Title,
    ProofType,
    FileUrl,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ComplaintRecords {
    Table,
    Id,
    Number,
    Category,
    ComplainantName,
    ReceivedDate,
    Description,
    ResolutionDescription,
    ResolutionDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ComplaintRecordProofs {
    Table,
    ComplaintRecordId,
    ProofId,
}
