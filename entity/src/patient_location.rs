use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Latest reported position plus geofence state. New rows default to
/// inside-the-zone so the first report never fires a false EXIT alert.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patient_location")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub patient_id: Uuid,
    pub lat: f64,
    pub lng: f64,
    pub is_inside_safe_zone: bool,
    pub last_alert_sent_at: Option<DateTimeUtc>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
