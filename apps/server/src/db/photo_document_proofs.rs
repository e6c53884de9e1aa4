//! Database queries for photo and document proofs.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entity::complaint_record_proof as proof_link;
use crate::entity::photo_document_proof::{self as proof, ActiveModel, Entity as Proof};
use crate::error::{AppError, AppResult};
use crate::models::PhotoDocumentProofInput;

use super::DbPool;

impl DbPool {
    pub async fn list_photo_document_proofs(&self) -> AppResult<Vec<proof::Model>> {
        let proofs = Proof::find()
            .order_by_desc(proof::Column::CreatedAt)
            .order_by_desc(proof::Column::Id)
            .all(self.connection())
            .await?;
        Ok(proofs)
    }

    pub async fn get_photo_document_proof(&self, id: Uuid) -> AppResult<Option<proof::Model>> {
        let proof = Proof::find_by_id(id).one(self.connection()).await?;
        Ok(proof)
    }

    pub async fn create_photo_document_proof(
        &self,
        input: PhotoDocumentProofInput,
    ) -> AppResult<proof::Model> {
        let now = Utc::now();
        let proof = ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(input.title),
            proof_type: Set(input.proof_type.as_str().to_string()),
            file_url: Set(input.file_url),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.connection())
        .await?;

        Ok(proof)
    }

    pub async fn update_photo_document_proof(
        &self,
        id: Uuid,
        input: PhotoDocumentProofInput,
    ) -> AppResult<proof::Model> {
        let existing = self
            .get_photo_document_proof(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Photo/document proof {}", id)))?;

        let mut active: ActiveModel = existing.into();
        active.title = Set(input.title);
        active.proof_type = Set(input.proof_type.as_str().to_string());
        active.file_url = Set(input.file_url);
        active.description = Set(input.description);
        active.updated_at = Set(Utc::now());

        let proof = active.update(self.connection()).await?;
        Ok(proof)
    }

    /// Delete a proof after detaching it from every complaint record.
    pub async fn delete_photo_document_proof(&self, id: Uuid) -> AppResult<()> {
        self.get_photo_document_proof(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Photo/document proof {}", id)))?;

        let txn = self.connection().begin().await?;
        proof_link::Entity::delete_many()
            .filter(proof_link::Column::ProofId.eq(id))
            .exec(&txn)
            .await?;
        Proof::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }
}
