use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub game_type: String, // "memory" | "attention" | "calculation"
    pub hits: i32,
    pub errors: i32,
    pub levels_completed: i32,
    pub duration_seconds: i32,
    pub played_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
