//! Non-compliance control entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "non_compliance_controls")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub number: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub detected_date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub corrective_measure: Option<String>,
    pub responsible: Option<String>,
    /// open, in_progress, closed
    pub status: String,
    /// pending, effective, not_effective
    pub effectiveness: String,
    pub department_id: Option<Uuid>,
    pub subproject_id: Option<Uuid>,
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
        from = "Column::SubprojectId",
        to = "super::reference_record::Column::Id",
        on_delete = "SetNull"
    )]
    Subproject,
}

impl ActiveModelBehavior for ActiveModel {}
