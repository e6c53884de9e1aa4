//! Join table between incident reports and investigation participants.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "incident_report_participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub incident_report_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub participant_id: Uuid,
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
        belongs_to = "super::investigation_participant::Entity",
        from = "Column::ParticipantId",
        to = "super::investigation_participant::Column::Id",
        on_delete = "Cascade"
    )]
    Participant,
}

impl Related<super::incident_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncidentReport.def()
    }
}

impl Related<super::investigation_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
