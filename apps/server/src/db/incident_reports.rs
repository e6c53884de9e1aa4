//! Database queries for incident reports and their relations.
//!
//! Participants and corrective actions are independent records; a report
//! only owns its link rows and its involved person. Every write touching
//! more than one table runs in a single transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entity::incident_report::{self as report, ActiveModel, Entity as IncidentReport};
use crate::entity::{
    corrective_action, incident_report_corrective_action as action_link,
    incident_report_participant as participant_link, investigation_participant, involved_person,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    CorrectiveActionResponse, IncidentReportInput, IncidentReportListQuery,
    IncidentReportResponse, InvestigationParticipantResponse, InvolvedPersonInput,
    InvolvedPersonResponse, ReferenceKind,
};

use super::DbPool;
use super::lookups::{check_reference, ensure_all_found, reference_names};

impl DbPool {
    /// List reports newest first, optionally filtered by department or subproject.
    pub async fn list_incident_reports(
        &self,
        query: &IncidentReportListQuery,
    ) -> AppResult<Vec<IncidentReportResponse>> {
        let mut select = IncidentReport::find();
        if let Some(department_id) = query.department_id {
            select = select.filter(report::Column::DepartmentId.eq(department_id));
        }
        if let Some(subproject_id) = query.subproject_id {
            select = select.filter(report::Column::SubprojectId.eq(subproject_id));
        }

        let reports = select
            .order_by_desc(report::Column::CreatedAt)
            .order_by_desc(report::Column::Id)
            .all(self.connection())
            .await?;

        load_details(self.connection(), reports).await
    }

    pub async fn get_incident_report(&self, id: Uuid) -> AppResult<Option<IncidentReportResponse>> {
        let Some(model) = IncidentReport::find_by_id(id)
            .one(self.connection())
            .await?
        else {
            return Ok(None);
        };

        Ok(load_details(self.connection(), vec![model]).await?.pop())
    }

    pub async fn create_incident_report(
        &self,
        input: IncidentReportInput,
    ) -> AppResult<IncidentReportResponse> {
        self.check_incident_references(&input).await?;

        let now = Utc::now();
        let id = Uuid::now_v7();

        let txn = self.connection().begin().await?;
        ActiveModel {
            id: Set(id),
            name: Set(input.name),
            role: Set(input.role),
            incident_date: Set(input.incident_date),
            incident_time: Set(input.incident_time),
            location: Set(input.location),
            description: Set(input.description),
            immediate_cause: Set(input.immediate_cause),
            root_cause: Set(input.root_cause),
            department_id: Set(input.department_id),
            subproject_id: Set(input.subproject_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        if let Some(person) = input.involved_person {
            insert_involved_person(&txn, id, person).await?;
        }
        link_participants(&txn, id, &input.investigation_participant_ids).await?;
        link_corrective_actions(&txn, id, &input.corrective_action_ids).await?;
        txn.commit().await?;

        self.get_incident_report(id)
            .await?
            .ok_or_else(|| AppError::Database("Failed to fetch created incident report".into()))
    }

    /// Replace every field and relation of an existing report.
    pub async fn update_incident_report(
        &self,
        id: Uuid,
        input: IncidentReportInput,
    ) -> AppResult<IncidentReportResponse> {
        let existing = IncidentReport::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident report {}", id)))?;

        self.check_incident_references(&input).await?;

        let txn = self.connection().begin().await?;
        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.role = Set(input.role);
        active.incident_date = Set(input.incident_date);
        active.incident_time = Set(input.incident_time);
        active.location = Set(input.location);
        active.description = Set(input.description);
        active.immediate_cause = Set(input.immediate_cause);
        active.root_cause = Set(input.root_cause);
        active.department_id = Set(input.department_id);
        active.subproject_id = Set(input.subproject_id);
        active.updated_at = Set(Utc::now());
        active.update(&txn).await?;

        detach_relations(&txn, id).await?;
        if let Some(person) = input.involved_person {
            insert_involved_person(&txn, id, person).await?;
        }
        link_participants(&txn, id, &input.investigation_participant_ids).await?;
        link_corrective_actions(&txn, id, &input.corrective_action_ids).await?;
        txn.commit().await?;

        self.get_incident_report(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident report {}", id)))
    }

    /// Delete a report; linked participants and corrective actions survive.
    pub async fn delete_incident_report(&self, id: Uuid) -> AppResult<()> {
        IncidentReport::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident report {}", id)))?;

        let txn = self.connection().begin().await?;
        detach_relations(&txn, id).await?;
        IncidentReport::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn check_incident_references(&self, input: &IncidentReportInput) -> AppResult<()> {
        let db = self.connection();
        check_reference(
            db,
            "department_id",
            input.department_id,
            ReferenceKind::Department,
        )
        .await?;
        check_reference(
            db,
            "subproject_id",
            input.subproject_id,
            ReferenceKind::Subproject,
        )
        .await?;

        if !input.investigation_participant_ids.is_empty() {
            let found: Vec<Uuid> = investigation_participant::Entity::find()
                .select_only()
                .column(investigation_participant::Column::Id)
                .filter(
                    investigation_participant::Column::Id
                        .is_in(input.investigation_participant_ids.iter().copied()),
                )
                .into_tuple()
                .all(db)
                .await?;
            ensure_all_found(
                "investigation_participant_ids",
                &input.investigation_participant_ids,
                &found,
            )?;
        }

        if !input.corrective_action_ids.is_empty() {
            let found: Vec<Uuid> = corrective_action::Entity::find()
                .select_only()
                .column(corrective_action::Column::Id)
                .filter(
                    corrective_action::Column::Id.is_in(input.corrective_action_ids.iter().copied()),
                )
                .into_tuple()
                .all(db)
                .await?;
            ensure_all_found("corrective_action_ids", &input.corrective_action_ids, &found)?;
        }

        Ok(())
    }
}

async fn insert_involved_person<C: ConnectionTrait>(
    db: &C,
    report_id: Uuid,
    person: InvolvedPersonInput,
) -> AppResult<()> {
    involved_person::ActiveModel {
        id: Set(Uuid::now_v7()),
        incident_report_id: Set(report_id),
        name: Set(person.name),
        position: Set(person.position),
        contact: Set(person.contact),
        injury_description: Set(person.injury_description),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await?;

    Ok(())
}

async fn link_participants<C: ConnectionTrait>(
    db: &C,
    report_id: Uuid,
    participant_ids: &[Uuid],
) -> AppResult<()> {
    if participant_ids.is_empty() {
        return Ok(());
    }

    let links = participant_ids
        .iter()
        .map(|participant_id| participant_link::ActiveModel {
            incident_report_id: Set(report_id),
            participant_id: Set(*participant_id),
        });
    participant_link::Entity::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

async fn link_corrective_actions<C: ConnectionTrait>(
    db: &C,
    report_id: Uuid,
    action_ids: &[Uuid],
) -> AppResult<()> {
    if action_ids.is_empty() {
        return Ok(());
    }

    let links = action_ids.iter().map(|action_id| action_link::ActiveModel {
        incident_report_id: Set(report_id),
        corrective_action_id: Set(*action_id),
    });
    action_link::Entity::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

/// Remove the involved person and every link row of a report.
async fn detach_relations<C: ConnectionTrait>(db: &C, report_id: Uuid) -> AppResult<()> {
    involved_person::Entity::delete_many()
        .filter(involved_person::Column::IncidentReportId.eq(report_id))
        .exec(db)
        .await?;
    participant_link::Entity::delete_many()
        .filter(participant_link::Column::IncidentReportId.eq(report_id))
        .exec(db)
        .await?;
    action_link::Entity::delete_many()
        .filter(action_link::Column::IncidentReportId.eq(report_id))
        .exec(db)
        .await?;

    Ok(())
}

/// Load relations for `reports` in a fixed number of queries and flatten
/// them into responses, preserving the input order.
async fn load_details<C: ConnectionTrait>(
    db: &C,
    reports: Vec<report::Model>,
) -> AppResult<Vec<IncidentReportResponse>> {
    if reports.is_empty() {
        return Ok(Vec::new());
    }
    let report_ids: Vec<Uuid> = reports.iter().map(|r| r.id).collect();

    let mut persons: HashMap<Uuid, involved_person::Model> = involved_person::Entity::find()
        .filter(involved_person::Column::IncidentReportId.is_in(report_ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.incident_report_id, p))
        .collect();

    let participant_links = participant_link::Entity::find()
        .filter(participant_link::Column::IncidentReportId.is_in(report_ids.iter().copied()))
        .all(db)
        .await?;
    let participants = if participant_links.is_empty() {
        Vec::new()
    } else {
        investigation_participant::Entity::find()
            .filter(
                investigation_participant::Column::Id
                    .is_in(participant_links.iter().map(|l| l.participant_id)),
            )
            .order_by_asc(investigation_participant::Column::CreatedAt)
            .order_by_asc(investigation_participant::Column::Id)
            .all(db)
            .await?
    };

    let action_links = action_link::Entity::find()
        .filter(action_link::Column::IncidentReportId.is_in(report_ids.iter().copied()))
        .all(db)
        .await?;
    let actions = if action_links.is_empty() {
        Vec::new()
    } else {
        corrective_action::Entity::find()
            .filter(
                corrective_action::Column::Id
                    .is_in(action_links.iter().map(|l| l.corrective_action_id)),
            )
            .order_by_asc(corrective_action::Column::CreatedAt)
            .order_by_asc(corrective_action::Column::Id)
            .all(db)
            .await?
    };

    let names = reference_names(
        db,
        reports
            .iter()
            .flat_map(|r| [r.department_id, r.subproject_id])
            .chain(participants.iter().map(|p| p.position_id)),
    )
    .await?;

    let participants_of = group_by_report(
        participant_links
            .iter()
            .map(|l| (l.incident_report_id, l.participant_id)),
    );
    let actions_of = group_by_report(
        action_links
            .iter()
            .map(|l| (l.incident_report_id, l.corrective_action_id)),
    );

    let responses = reports
        .into_iter()
        .map(|r| {
            let linked_participants = participants_of.get(&r.id);
            let linked_actions = actions_of.get(&r.id);

            IncidentReportResponse {
                department_name: r.department_id.and_then(|id| names.get(&id).cloned()),
                subproject_name: r.subproject_id.and_then(|id| names.get(&id).cloned()),
                involved_person: persons.remove(&r.id).map(InvolvedPersonResponse::from),
                investigation_participants: participants
                    .iter()
                    .filter(|p| linked_participants.is_some_and(|ids| ids.contains(&p.id)))
                    .cloned()
                    .map(|p| InvestigationParticipantResponse::from_model(p, &names))
                    .collect(),
                corrective_actions: actions
                    .iter()
                    .filter(|a| linked_actions.is_some_and(|ids| ids.contains(&a.id)))
                    .cloned()
                    .map(CorrectiveActionResponse::from)
                    .collect(),
                id: r.id,
                name: r.name,
                role: r.role,
                incident_date: r.incident_date,
                incident_time: r.incident_time,
                location: r.location,
                description: r.description,
                immediate_cause: r.immediate_cause,
                root_cause: r.root_cause,
                department_id: r.department_id,
                subproject_id: r.subproject_id,
                created_at: r.created_at,
                updated_at: r.updated_at,
            }
        })
        .collect();

    Ok(responses)
}

fn group_by_report(pairs: impl Iterator<Item = (Uuid, Uuid)>) -> HashMap<Uuid, Vec<Uuid>> {
    let mut grouped: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for (report_id, related_id) in pairs {
        grouped.entry(report_id).or_default().push(related_id);
    }
    grouped
}
