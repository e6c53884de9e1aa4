//! Person involved in an incident. Owned by exactly one incident report.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "involved_persons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub incident_report_id: Uuid,
    pub name: String,
    pub position: Option<String>,
    pub contact: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub injury_description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::incident_report::Entity",
        from = "Column::IncidentReportId",
        to = "super::incident_report::Column::Id",
        on_delete = "Cascade"
    )]
    IncidentReport,
}

impl Related<super::incident_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncidentReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
