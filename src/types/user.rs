use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::identity::Role;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RUserCreate {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize)]
pub struct DBProfileCreate {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub birth_date: Option<NaiveDate>,
    pub auth_hash: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub id: Uuid,
    pub token: String,
}
