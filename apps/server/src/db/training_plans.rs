//! Database queries for training plans.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::training_plan::{self as plan, ActiveModel, Entity as TrainingPlan};
use crate::error::{AppError, AppResult};
use crate::models::{ReferenceKind, TrainingPlanInput, TrainingPlanResponse};

use super::DbPool;
use super::lookups::{check_reference, reference_names};

impl DbPool {
    pub async fn list_training_plans(&self) -> AppResult<Vec<TrainingPlanResponse>> {
        let models = TrainingPlan::find()
            .order_by_desc(plan::Column::CreatedAt)
            .order_by_desc(plan::Column::Id)
            .all(self.connection())
            .await?;

        let names = reference_names(
            self.connection(),
            models.iter().flat_map(|m| [m.department_id, m.position_id]),
        )
        .await?;

        Ok(models
            .into_iter()
            .map(|m| TrainingPlanResponse::from_model(m, &names))
            .collect())
    }

    pub async fn get_training_plan(&self, id: Uuid) -> AppResult<Option<TrainingPlanResponse>> {
        let Some(model) = TrainingPlan::find_by_id(id).one(self.connection()).await? else {
            return Ok(None);
        };
        self.training_plan_response(model).await.map(Some)
    }

    pub async fn create_training_plan(
        &self,
        input: TrainingPlanInput,
    ) -> AppResult<TrainingPlanResponse> {
        self.check_training_plan_references(&input).await?;

        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(input.title),
            objective: Set(input.objective),
            trainer: Set(input.trainer),
            planned_date: Set(input.planned_date),
            completed_date: Set(input.completed_date),
            status: Set(input.status.as_str().to_string()),
            department_id: Set(input.department_id),
            position_id: Set(input.position_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.connection())
        .await?;

        self.training_plan_response(model).await
    }

    pub async fn update_training_plan(
        &self,
        id: Uuid,
        input: TrainingPlanInput,
    ) -> AppResult<TrainingPlanResponse> {
        let existing = TrainingPlan::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Training plan {}", id)))?;

        self.check_training_plan_references(&input).await?;

        let mut active: ActiveModel = existing.into();
        active.title = Set(input.title);
        active.objective = Set(input.objective);
        active.trainer = Set(input.trainer);
        active.planned_date = Set(input.planned_date);
        active.completed_date = Set(input.completed_date);
        active.status = Set(input.status.as_str().to_string());
        active.department_id = Set(input.department_id);
        active.position_id = Set(input.position_id);
        active.updated_at = Set(Utc::now());
        let model = active.update(self.connection()).await?;

        self.training_plan_response(model).await
    }

    pub async fn delete_training_plan(&self, id: Uuid) -> AppResult<()> {
        TrainingPlan::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Training plan {}", id)))?;

        TrainingPlan::delete_by_id(id).exec(self.connection()).await?;
        Ok(())
    }

    async fn check_training_plan_references(&self, input: &TrainingPlanInput) -> AppResult<()> {
        check_reference(
            self.connection(),
            "department_id",
            input.department_id,
            ReferenceKind::Department,
        )
        .await?;
        check_reference(
            self.connection(),
            "position_id",
            input.position_id,
            ReferenceKind::Position,
        )
        .await
    }

    async fn training_plan_response(
        &self,
        model: plan::Model,
    ) -> AppResult<TrainingPlanResponse> {
        let names = reference_names(self.connection(), [model.department_id, model.position_id])
            .await?;
        Ok(TrainingPlanResponse::from_model(model, &names))
    }
}
