//! Database queries for corrective actions.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entity::corrective_action::{self as action, ActiveModel, Entity as CorrectiveAction};
use crate::entity::incident_report_corrective_action;
use crate::error::{AppError, AppResult};
use crate::models::CorrectiveActionInput;

use super::DbPool;

impl DbPool {
    pub async fn list_corrective_actions(&self) -> AppResult<Vec<action::Model>> {
        let models = CorrectiveAction::find()
            .order_by_desc(action::Column::CreatedAt)
            .order_by_desc(action::Column::Id)
            .all(self.connection())
            .await?;

        Ok(models)
    }

    pub async fn get_corrective_action(&self, id: Uuid) -> AppResult<Option<action::Model>> {
        let model = CorrectiveAction::find_by_id(id)
            .one(self.connection())
            .await?;
        Ok(model)
    }

    pub async fn create_corrective_action(
        &self,
        input: CorrectiveActionInput,
    ) -> AppResult<action::Model> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            description: Set(input.description),
            responsible: Set(input.responsible),
            due_date: Set(input.due_date),
            status: Set(input.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.connection())
        .await?;

        Ok(model)
    }

    pub async fn update_corrective_action(
        &self,
        id: Uuid,
        input: CorrectiveActionInput,
    ) -> AppResult<action::Model> {
        let existing = self
            .get_corrective_action(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Corrective action {}", id)))?;

        let mut active: ActiveModel = existing.into();
        active.description = Set(input.description);
        active.responsible = Set(input.responsible);
        active.due_date = Set(input.due_date);
        active.status = Set(input.status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let model = active.update(self.connection()).await?;
        Ok(model)
    }

    /// Delete an action after detaching it from every incident report.
    pub async fn delete_corrective_action(&self, id: Uuid) -> AppResult<()> {
        self.get_corrective_action(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Corrective action {}", id)))?;

        let txn = self.connection().begin().await?;
        incident_report_corrective_action::Entity::delete_many()
            .filter(incident_report_corrective_action::Column::CorrectiveActionId.eq(id))
            .exec(&txn)
            .await?;
        CorrectiveAction::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }
}
