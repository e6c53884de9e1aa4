//! Training plan entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "training_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub objective: Option<String>,
    pub trainer: Option<String>,
    pub planned_date: Date,
    pub completed_date: Option<Date>,
    /// planned, completed, cancelled
    pub status: String,
    pub department_id: Option<Uuid>,
    pub position_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reference_record::Entity",
        from = "Column::DepartmentId",
        to = "super::reference_record::Column::Id",
        on_delete = "SetNull"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::reference_record::Entity",
        from = "Column::PositionId",
        to = "super::reference_record::Column::Id",
        on_delete = "SetNull"
    )]
    Position,
}

impl ActiveModelBehavior for ActiveModel {}
