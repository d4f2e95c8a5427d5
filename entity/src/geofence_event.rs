use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "geofence_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub caregiver_id: Uuid,
    pub event_type: String, // "ENTER" | "EXIT" | client-supplied
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub triggered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
