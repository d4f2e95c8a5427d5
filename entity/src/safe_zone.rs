use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One safe zone per patient, defined by the linked caregiver.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "safe_zone")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub patient_id: Uuid,
    pub caregiver_id: Uuid,
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_m: f64,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
