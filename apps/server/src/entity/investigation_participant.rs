//! Investigation participant entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "investigation_participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Role held within the investigation team
    pub role: Option<String>,
    /// References a `position` reference record
    pub position_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reference_record::Entity",
        from = "Column::PositionId",
        to = "super::reference_record::Column::Id",
        on_delete = "SetNull"
    )]
    Position,
    #[sea_orm(has_many = "super::incident_report_participant::Entity")]
    ReportLinks,
}

impl ActiveModelBehavior for ActiveModel {}
