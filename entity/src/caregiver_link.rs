use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Confirmed 1:1 relationship. Unique indexes on both patient_id and
/// caregiver_id are what make concurrent confirmations safe.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "caregiver_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub caregiver_id: Uuid,
    pub patient_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
