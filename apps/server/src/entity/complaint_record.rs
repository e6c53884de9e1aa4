//! Complaint and claim record entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complaint_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub number: String,
    /// complaint, claim
    pub category: String,
    pub complainant_name: String,
    pub received_date: Date,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub resolution_description: Option<String>,
    pub resolution_date: Option<Date>,
    /// open, in_progress, resolved, closed
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::complaint_record_proof::Entity")]
    ProofLinks,
}

impl Related<super::photo_document_proof::Entity> for Entity {
    fn to() -> RelationDef {
        super::complaint_record_proof::Relation::Proof.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::complaint_record_proof::Relation::ComplaintRecord.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
