//! Database queries for reference data (departments, positions, ...).

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entity::reference_record::{self, ActiveModel, Entity as ReferenceRecord};
use crate::entity::{
    incident_report, investigation_participant, non_compliance_control, training_plan,
};
use crate::error::{AppError, AppResult};
use crate::models::{ReferenceKind, ReferenceRecordInput};

use super::DbPool;

impl DbPool {
    /// List records of one kind, newest first.
    pub async fn list_reference_records(
        &self,
        kind: ReferenceKind,
    ) -> AppResult<Vec<reference_record::Model>> {
        let records = ReferenceRecord::find()
            .filter(reference_record::Column::Kind.eq(kind.as_str()))
            .order_by_desc(reference_record::Column::CreatedAt)
            .order_by_desc(reference_record::Column::Id)
            .all(self.connection())
            .await?;

        Ok(records)
    }

    /// Get a record by id, only if it belongs to `kind`.
    pub async fn get_reference_record(
        &self,
        kind: ReferenceKind,
        id: Uuid,
    ) -> AppResult<Option<reference_record::Model>> {
        let record = ReferenceRecord::find_by_id(id)
            .filter(reference_record::Column::Kind.eq(kind.as_str()))
            .one(self.connection())
            .await?;

        Ok(record)
    }

    pub async fn create_reference_record(
        &self,
        kind: ReferenceKind,
        input: ReferenceRecordInput,
    ) -> AppResult<reference_record::Model> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            kind: Set(kind.as_str().to_string()),
            name: Set(input.name),
            code: Set(input.code),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let record = model.insert(self.connection()).await?;
        Ok(record)
    }

    pub async fn update_reference_record(
        &self,
        kind: ReferenceKind,
        id: Uuid,
        input: ReferenceRecordInput,
    ) -> AppResult<reference_record::Model> {
        let existing = self
            .get_reference_record(kind, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {}", kind.label(), id)))?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.code = Set(input.code);
        active.description = Set(input.description);
        active.updated_at = Set(Utc::now());

        let record = active.update(self.connection()).await?;
        Ok(record)
    }

    /// Delete a record, clearing every column that points at it.
    pub async fn delete_reference_record(&self, kind: ReferenceKind, id: Uuid) -> AppResult<()> {
        self.get_reference_record(kind, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {}", kind.label(), id)))?;

        let txn = self.connection().begin().await?;
        detach_reference(&txn, kind, id).await?;
        ReferenceRecord::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }
}

async fn detach_reference<C: ConnectionTrait>(
    db: &C,
    kind: ReferenceKind,
    id: Uuid,
) -> AppResult<()> {
    let cleared = || Expr::value(Option::<Uuid>::None);

    match kind {
        ReferenceKind::Department => {
            incident_report::Entity::update_many()
                .col_expr(incident_report::Column::DepartmentId, cleared())
                .filter(incident_report::Column::DepartmentId.eq(id))
                .exec(db)
                .await?;
            non_compliance_control::Entity::update_many()
                .col_expr(non_compliance_control::Column::DepartmentId, cleared())
                .filter(non_compliance_control::Column::DepartmentId.eq(id))
                .exec(db)
                .await?;
            training_plan::Entity::update_many()
                .col_expr(training_plan::Column::DepartmentId, cleared())
                .filter(training_plan::Column::DepartmentId.eq(id))
                .exec(db)
                .await?;
        }
        ReferenceKind::Subproject => {
            incident_report::Entity::update_many()
                .col_expr(incident_report::Column::SubprojectId, cleared())
                .filter(incident_report::Column::SubprojectId.eq(id))
                .exec(db)
                .await?;
            non_compliance_control::Entity::update_many()
                .col_expr(non_compliance_control::Column::SubprojectId, cleared())
                .filter(non_compliance_control::Column::SubprojectId.eq(id))
                .exec(db)
                .await?;
        }
        ReferenceKind::Position => {
            investigation_participant::Entity::update_many()
                .col_expr(investigation_participant::Column::PositionId, cleared())
                .filter(investigation_participant::Column::PositionId.eq(id))
                .exec(db)
                .await?;
            training_plan::Entity::update_many()
                .col_expr(training_plan::Column::PositionId, cleared())
                .filter(training_plan::Column::PositionId.eq(id))
                .exec(db)
                .await?;
        }
        ReferenceKind::ToolboxTalk
        | ReferenceKind::EnvironmentalFactor
        | ReferenceKind::RisksAndImpact
        | ReferenceKind::AcceptanceConfirmation => {}
    }

    Ok(())
}
