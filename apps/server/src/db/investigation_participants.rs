//! Database queries for investigation participants.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entity::incident_report_participant;
use crate::entity::investigation_participant::{
    self as participant, ActiveModel, Entity as Participant,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    InvestigationParticipantInput, InvestigationParticipantResponse, ReferenceKind,
};

use super::DbPool;
use super::lookups::{check_reference, reference_names};

impl DbPool {
    pub async fn list_investigation_participants(
        &self,
    ) -> AppResult<Vec<InvestigationParticipantResponse>> {
        let models = Participant::find()
            .order_by_desc(participant::Column::CreatedAt)
            .order_by_desc(participant::Column::Id)
            .all(self.connection())
            .await?;

        let names =
            reference_names(self.connection(), models.iter().map(|m| m.position_id)).await?;

        Ok(models
            .into_iter()
            .map(|m| InvestigationParticipantResponse::from_model(m, &names))
            .collect())
    }

    pub async fn get_investigation_participant(
        &self,
        id: Uuid,
    ) -> AppResult<Option<InvestigationParticipantResponse>> {
        let Some(model) = Participant::find_by_id(id).one(self.connection()).await? else {
            return Ok(None);
        };

        let names = reference_names(self.connection(), [model.position_id]).await?;
        Ok(Some(InvestigationParticipantResponse::from_model(
            model, &names,
        )))
    }

    pub async fn create_investigation_participant(
        &self,
        input: InvestigationParticipantInput,
    ) -> AppResult<InvestigationParticipantResponse> {
        check_reference(
            self.connection(),
            "position_id",
            input.position_id,
            ReferenceKind::Position,
        )
        .await?;

        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            role: Set(input.role),
            position_id: Set(input.position_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.connection())
        .await?;

        let names = reference_names(self.connection(), [model.position_id]).await?;
        Ok(InvestigationParticipantResponse::from_model(model, &names))
    }

    pub async fn update_investigation_participant(
        &self,
        id: Uuid,
        input: InvestigationParticipantInput,
    ) -> AppResult<InvestigationParticipantResponse> {
        let existing = Participant::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Investigation participant {}", id)))?;

        check_reference(
            self.connection(),
            "position_id",
            input.position_id,
            ReferenceKind::Position,
        )
        .await?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.role = Set(input.role);
        active.position_id = Set(input.position_id);
        active.updated_at = Set(Utc::now());
        let model = active.update(self.connection()).await?;

        let names = reference_names(self.connection(), [model.position_id]).await?;
        Ok(InvestigationParticipantResponse::from_model(model, &names))
    }

    /// Delete a participant after detaching it from every incident report.
    pub async fn delete_investigation_participant(&self, id: Uuid) -> AppResult<()> {
        Participant::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Investigation participant {}", id)))?;

        let txn = self.connection().begin().await?;
        incident_report_participant::Entity::delete_many()
            .filter(incident_report_participant::Column::ParticipantId.eq(id))
            .exec(&txn)
            .await?;
        Participant::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }
}
