//! Training plan models.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{optional_text, required, required_text};
use crate::entity::training_plan;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPlanStatus {
    #[default]
    Planned,
    Completed,
    Cancelled,
}

impl TrainingPlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(Self::Planned),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TrainingPlanRequest {
    pub title: Option<String>,
    pub objective: Option<String>,
    pub trainer: Option<String>,
    pub planned_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub status: Option<TrainingPlanStatus>,
    /// Department whose staff attends
    pub department_id: Option<Uuid>,
    /// Position the training targets
    pub position_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct TrainingPlanInput {
    pub title: String,
    pub objective: Option<String>,
    pub trainer: Option<String>,
    pub planned_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub status: TrainingPlanStatus,
    pub department_id: Option<Uuid>,
    pub position_id: Option<Uuid>,
}

impl TrainingPlanRequest {
    pub fn validate(self) -> AppResult<TrainingPlanInput> {
        Ok(TrainingPlanInput {
            title: required_text("title", self.title)?,
            objective: optional_text(self.objective),
            trainer: optional_text(self.trainer),
            planned_date: required("planned_date", self.planned_date)?,
            completed_date: self.completed_date,
            status: self.status.unwrap_or_default(),
            department_id: self.department_id,
            position_id: self.position_id,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrainingPlanResponse {
    pub id: Uuid,
    pub title: String,
    pub objective: Option<String>,
    pub trainer: Option<String>,
    pub planned_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub status: TrainingPlanStatus,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub position_id: Option<Uuid>,
    pub position_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrainingPlanResponse {
    pub fn from_model(m: training_plan::Model, names: &HashMap<Uuid, String>) -> Self {
        Self {
            id: m.id,
            department_name: m.department_id.and_then(|id| names.get(&id).cloned()),
            position_name: m.position_id.and_then(|id| names.get(&id).cloned()),
            title: m.title,
            objective: m.objective,
            trainer: m.trainer,
            planned_date: m.planned_date,
            completed_date: m.completed_date,
            status: TrainingPlanStatus::parse(&m.status).unwrap_or_default(),
            department_id: m.department_id,
            position_id: m.position_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
