use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One issued linking code. Only the sha256 digest of the 6-digit code is
/// stored; the plaintext goes out by email and is never persisted.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "caregiver_invite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub caregiver_email: String, // normalized
    pub code_hash: String,
    pub used: bool,
    pub expires_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
