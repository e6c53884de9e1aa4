//! Database queries for the complaint and claim register.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entity::complaint_record::{self as complaint, ActiveModel, Entity as ComplaintRecord};
use crate::entity::{complaint_record_proof as proof_link, photo_document_proof};
use crate::error::{AppError, AppResult};
use crate::models::{ComplaintRecordInput, ComplaintRecordResponse, PhotoDocumentProofResponse};

use super::DbPool;
use super::lookups::{ensure_all_found, ensure_number_available};

impl DbPool {
    pub async fn list_complaint_records(&self) -> AppResult<Vec<ComplaintRecordResponse>> {
        let records = ComplaintRecord::find()
            .order_by_desc(complaint::Column::CreatedAt)
            .order_by_desc(complaint::Column::Id)
            .all(self.connection())
            .await?;

        attach_proofs(self.connection(), records).await
    }

    pub async fn get_complaint_record(
        &self,
        id: Uuid,
    ) -> AppResult<Option<ComplaintRecordResponse>> {
        let Some(record) = ComplaintRecord::find_by_id(id)
            .one(self.connection())
            .await?
        else {
            return Ok(None);
        };

        Ok(attach_proofs(self.connection(), vec![record]).await?.pop())
    }

    pub async fn create_complaint_record(
        &self,
        input: ComplaintRecordInput,
    ) -> AppResult<ComplaintRecordResponse> {
        ensure_number_available::<ComplaintRecord, _>(
            self.connection(),
            complaint::Column::Number,
            complaint::Column::Id,
            &input.number,
            None,
        )
        .await?;
        check_proofs_exist(self.connection(), &input.photo_document_proof_ids).await?;

        let now = Utc::now();
        let id = Uuid::now_v7();

        let number = input.number.clone();
        let txn = self.connection().begin().await?;
        ActiveModel {
            id: Set(id),
            number: Set(input.number),
            category: Set(input.category.as_str().to_string()),
            complainant_name: Set(input.complainant_name),
            received_date: Set(input.received_date),
            description: Set(input.description),
            resolution_description: Set(input.resolution_description),
            resolution_date: Set(input.resolution_date),
            status: Set(input.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|err| AppError::from_numbered_write(err, &number))?;
        link_proofs(&txn, id, &input.photo_document_proof_ids).await?;
        txn.commit().await?;

        self.get_complaint_record(id)
            .await?
            .ok_or_else(|| AppError::Database("Failed to fetch created complaint record".into()))
    }

    /// Replace the fields and attached proofs of an existing record.
    pub async fn update_complaint_record(
        &self,
        id: Uuid,
        input: ComplaintRecordInput,
    ) -> AppResult<ComplaintRecordResponse> {
        let existing = ComplaintRecord::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Complaint record {}", id)))?;

        ensure_number_available::<ComplaintRecord, _>(
            self.connection(),
            complaint::Column::Number,
            complaint::Column::Id,
            &input.number,
            Some(id),
        )
        .await?;
        check_proofs_exist(self.connection(), &input.photo_document_proof_ids).await?;

        let number = input.number.clone();
        let txn = self.connection().begin().await?;
        let mut active: ActiveModel = existing.into();
        active.number = Set(input.number);
        active.category = Set(input.category.as_str().to_string());
        active.complainant_name = Set(input.complainant_name);
        active.received_date = Set(input.received_date);
        active.description = Set(input.description);
        active.resolution_description = Set(input.resolution_description);
        active.resolution_date = Set(input.resolution_date);
        active.status = Set(input.status.as_str().to_string());
        active.updated_at = Set(Utc::now());
        active
            .update(&txn)
            .await
            .map_err(|err| AppError::from_numbered_write(err, &number))?;

        proof_link::Entity::delete_many()
            .filter(proof_link::Column::ComplaintRecordId.eq(id))
            .exec(&txn)
            .await?;
        link_proofs(&txn, id, &input.photo_document_proof_ids).await?;
        txn.commit().await?;

        self.get_complaint_record(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Complaint record {}", id)))
    }

    /// Delete a record; its proofs survive unattached.
    pub async fn delete_complaint_record(&self, id: Uuid) -> AppResult<()> {
        ComplaintRecord::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Complaint record {}", id)))?;

        let txn = self.connection().begin().await?;
        proof_link::Entity::delete_many()
            .filter(proof_link::Column::ComplaintRecordId.eq(id))
            .exec(&txn)
            .await?;
        ComplaintRecord::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }
}

async fn check_proofs_exist<C: ConnectionTrait>(db: &C, proof_ids: &[Uuid]) -> AppResult<()> {
    if proof_ids.is_empty() {
        return Ok(());
    }

    let found: Vec<Uuid> = photo_document_proof::Entity::find()
        .select_only()
        .column(photo_document_proof::Column::Id)
        .filter(photo_document_proof::Column::Id.is_in(proof_ids.iter().copied()))
        .into_tuple()
        .all(db)
        .await?;
    ensure_all_found("photo_document_proof_ids", proof_ids, &found)
}

async fn link_proofs<C: ConnectionTrait>(
    db: &C,
    record_id: Uuid,
    proof_ids: &[Uuid],
) -> AppResult<()> {
    if proof_ids.is_empty() {
        return Ok(());
    }

    let links = proof_ids.iter().map(|proof_id| proof_link::ActiveModel {
        complaint_record_id: Set(record_id),
        proof_id: Set(*proof_id),
    });
    proof_link::Entity::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

async fn attach_proofs<C: ConnectionTrait>(
    db: &C,
    records: Vec<complaint::Model>,
) -> AppResult<Vec<ComplaintRecordResponse>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let links = proof_link::Entity::find()
        .filter(proof_link::Column::ComplaintRecordId.is_in(records.iter().map(|r| r.id)))
        .all(db)
        .await?;

    let proofs: HashMap<Uuid, photo_document_proof::Model> = if links.is_empty() {
        HashMap::new()
    } else {
        photo_document_proof::Entity::find()
            .filter(photo_document_proof::Column::Id.is_in(links.iter().map(|l| l.proof_id)))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect()
    };

    let responses = records
        .into_iter()
        .map(|record| {
            let mut attached: Vec<&photo_document_proof::Model> = links
                .iter()
                .filter(|l| l.complaint_record_id == record.id)
                .filter_map(|l| proofs.get(&l.proof_id))
                .collect();
            attached.sort_by_key(|p| (p.created_at, p.id));

            let attached = attached
                .into_iter()
                .cloned()
                .map(PhotoDocumentProofResponse::from)
                .collect();
            ComplaintRecordResponse::from_model(record, attached)
        })
        .collect();

    Ok(responses)
}
