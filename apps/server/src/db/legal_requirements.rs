//! Database queries for the legal requirement register.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::legal_requirement::{
    self as requirement, ActiveModel, Entity as LegalRequirement,
};
use crate::error::{AppError, AppResult};
use crate::models::LegalRequirementInput;

use super::DbPool;
use super::lookups::ensure_number_available;

impl DbPool {
    pub async fn list_legal_requirements(&self) -> AppResult<Vec<requirement::Model>> {
        let models = LegalRequirement::find()
            .order_by_desc(requirement::Column::CreatedAt)
            .order_by_desc(requirement::Column::Id)
            .all(self.connection())
            .await?;
        Ok(models)
    }

    pub async fn get_legal_requirement(&self, id: Uuid) -> AppResult<Option<requirement::Model>> {
        let model = LegalRequirement::find_by_id(id)
            .one(self.connection())
            .await?;
        Ok(model)
    }

    pub async fn create_legal_requirement(
        &self,
        input: LegalRequirementInput,
    ) -> AppResult<requirement::Model> {
        ensure_number_available::<LegalRequirement, _>(
            self.connection(),
            requirement::Column::Number,
            requirement::Column::Id,
            &input.number,
            None,
        )
        .await?;

        let number = input.number.clone();
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            number: Set(input.number),
            title: Set(input.title),
            issuing_body: Set(input.issuing_body),
            effective_date: Set(input.effective_date),
            status: Set(input.status.as_str().to_string()),
            file_url: Set(input.file_url),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.connection())
        .await
        .map_err(|err| AppError::from_numbered_write(err, &number))?;

        Ok(model)
    }

    pub async fn update_legal_requirement(
        &self,
        id: Uuid,
        input: LegalRequirementInput,
    ) -> AppResult<requirement::Model> {
        let existing = self
            .get_legal_requirement(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Legal requirement {}", id)))?;

        ensure_number_available::<LegalRequirement, _>(
            self.connection(),
            requirement::Column::Number,
            requirement::Column::Id,
            &input.number,
            Some(id),
        )
        .await?;

        let number = input.number.clone();
        let mut active: ActiveModel = existing.into();
        active.number = Set(input.number);
        active.title = Set(input.title);
        active.issuing_body = Set(input.issuing_body);
        active.effective_date = Set(input.effective_date);
        active.status = Set(input.status.as_str().to_string());
        active.file_url = Set(input.file_url);
        active.description = Set(input.description);
        active.updated_at = Set(Utc::now());

        let model = active
            .update(self.connection())
            .await
            .map_err(|err| AppError::from_numbered_write(err, &number))?;
        Ok(model)
    }

    pub async fn delete_legal_requirement(&self, id: Uuid) -> AppResult<()> {
        LegalRequirement::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Legal requirement {}", id)))?;

        LegalRequirement::delete_by_id(id).exec(self.connection()).await?;
        Ok(())
    }
}
