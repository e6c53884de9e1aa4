//! Join table between complaint records and photo/document proofs.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complaint_record_proofs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub complaint_record_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub proof_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::complaint_record::Entity",
        from = "Column::ComplaintRecordId",
        to = "super::complaint_record::Column::Id",
        on_delete = "Cascade"
    )]
    ComplaintRecord,
    #[sea_orm(
        belongs_to = "super::photo_document_proof::Entity",
        from = "Column::ProofId",
        to = "super::photo_document_proof::Column::Id",
        on_delete = "Cascade"
    )]
    Proof,
}

impl Related<super::complaint_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplaintRecord.def()
    }
}

impl Related<super::photo_document_proof::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proof.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
