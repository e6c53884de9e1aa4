//! Incident report entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "incident_reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Name of the person filing the report
    pub name: String,
    /// Role of the person filing the report
    pub role: String,
    pub incident_date: Date,
    pub incident_time: Option<Time>,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub immediate_cause: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub root_cause: Option<String>,
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
    #[sea_orm(has_one = "super::involved_person::Entity")]
    InvolvedPerson,
    #[sea_orm(has_many = "super::incident_report_participant::Entity")]
    ParticipantLinks,
    #[sea_orm(has_many = "super::incident_report_corrective_action::Entity")]
    CorrectiveActionLinks,
}

impl Related<super::involved_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvolvedPerson.def()
    }
}

impl Related<super::investigation_participant::Entity> for Entity {
    fn to() -> RelationDef {
        super::incident_report_participant::Relation::Participant.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::incident_report_participant::Relation::IncidentReport
                .def()
                .rev(),
        )
    }
}

impl Related<super::corrective_action::Entity> for Entity {
    fn to() -> RelationDef {
        super::incident_report_corrective_action::Relation::CorrectiveAction.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::incident_report_corrective_action::Relation::IncidentReport
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
