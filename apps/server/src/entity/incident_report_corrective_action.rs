//! Join table between incident reports and corrective actions.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "incident_report_corrective_actions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub incident_report_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub corrective_action_id: Uuid,
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
    #[sea_orm(
        belongs_to = "super::corrective_action::Entity",
        from = "Column::CorrectiveActionId",
        to = "super::corrective_action::Column::Id",
        on_delete = "Cascade"
    )]
    CorrectiveAction,
}

impl Related<super::incident_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncidentReport.def()
    }
}

impl Related<super::corrective_action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CorrectiveAction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
