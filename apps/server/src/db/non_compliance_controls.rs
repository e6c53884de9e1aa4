//! Database queries for non-compliance controls.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::non_compliance_control::{
    self as control, ActiveModel, Entity as NonComplianceControl,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    NonComplianceControlInput, NonComplianceControlResponse, NonComplianceListQuery,
    ReferenceKind,
};

use super::DbPool;
use super::lookups::{check_reference, ensure_number_available, reference_names};

impl DbPool {
    pub async fn list_non_compliance_controls(
        &self,
        query: &NonComplianceListQuery,
    ) -> AppResult<Vec<NonComplianceControlResponse>> {
        let mut select = NonComplianceControl::find();
        if let Some(status) = query.status {
            select = select.filter(control::Column::Status.eq(status.as_str()));
        }

        let models = select
            .order_by_desc(control::Column::CreatedAt)
            .order_by_desc(control::Column::Id)
            .all(self.connection())
            .await?;

        let names = reference_names(
            self.connection(),
            models
                .iter()
                .flat_map(|m| [m.department_id, m.subproject_id]),
        )
        .await?;

        Ok(models
            .into_iter()
            .map(|m| NonComplianceControlResponse::from_model(m, &names))
            .collect())
    }

    pub async fn get_non_compliance_control(
        &self,
        id: Uuid,
    ) -> AppResult<Option<NonComplianceControlResponse>> {
        let Some(model) = NonComplianceControl::find_by_id(id)
            .one(self.connection())
            .await?
        else {
            return Ok(None);
        };

        self.non_compliance_response(model).await.map(Some)
    }

    pub async fn create_non_compliance_control(
        &self,
        input: NonComplianceControlInput,
    ) -> AppResult<NonComplianceControlResponse> {
        self.check_non_compliance_input(&input, None).await?;

        let number = input.number.clone();
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            number: Set(input.number),
            description: Set(input.description),
            detected_date: Set(input.detected_date),
            corrective_measure: Set(input.corrective_measure),
            responsible: Set(input.responsible),
            status: Set(input.status.as_str().to_string()),
            effectiveness: Set(input.effectiveness.as_str().to_string()),
            department_id: Set(input.department_id),
            subproject_id: Set(input.subproject_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.connection())
        .await
        .map_err(|err| AppError::from_numbered_write(err, &number))?;

        self.non_compliance_response(model).await
    }

    pub async fn update_non_compliance_control(
        &self,
        id: Uuid,
        input: NonComplianceControlInput,
    ) -> AppResult<NonComplianceControlResponse> {
        let existing = NonComplianceControl::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Non-compliance control {}", id)))?;

        self.check_non_compliance_input(&input, Some(id)).await?;

        let number = input.number.clone();
        let mut active: ActiveModel = existing.into();
        active.number = Set(input.number);
        active.description = Set(input.description);
        active.detected_date = Set(input.detected_date);
        active.corrective_measure = Set(input.corrective_measure);
        active.responsible = Set(input.responsible);
        active.status = Set(input.status.as_str().to_string());
        active.effectiveness = Set(input.effectiveness.as_str().to_string());
        active.department_id = Set(input.department_id);
        active.subproject_id = Set(input.subproject_id);
        active.updated_at = Set(Utc::now());
        let model = active
            .update(self.connection())
            .await
            .map_err(|err| AppError::from_numbered_write(err, &number))?;

        self.non_compliance_response(model).await
    }

    pub async fn delete_non_compliance_control(&self, id: Uuid) -> AppResult<()> {
        NonComplianceControl::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Non-compliance control {}", id)))?;

        NonComplianceControl::delete_by_id(id).exec(self.connection()).await?;
        Ok(())
    }

    async fn check_non_compliance_input(
        &self,
        input: &NonComplianceControlInput,
        exclude: Option<Uuid>,
    ) -> AppResult<()> {
        ensure_number_available::<NonComplianceControl, _>(
            self.connection(),
            control::Column::Number,
            control::Column::Id,
            &input.number,
            exclude,
        )
        .await?;

        check_reference(
            self.connection(),
            "department_id",
            input.department_id,
            ReferenceKind::Department,
        )
        .await?;
        check_reference(
            self.connection(),
            "subproject_id",
            input.subproject_id,
            ReferenceKind::Subproject,
        )
        .await
    }

    async fn non_compliance_response(
        &self,
        model: control::Model,
    ) -> AppResult<NonComplianceControlResponse> {
        let names = reference_names(
            self.connection(),
            [model.department_id, model.subproject_id],
        )
        .await?;
        Ok(NonComplianceControlResponse::from_model(model, &names))
    }
}
