use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::caregiver_invite::{
    ActiveModel as InviteActive, Column, Entity as Invite, Model as InviteModel,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

impl PostgresService {
    /// Issuing a fresh code retires every open invite for the same target, so
    /// only the newest code is ever redeemable.
    pub async fn invalidate_open_invites(
        &self,
        patient_id: Uuid,
        caregiver_email: &str,
    ) -> Result<u64, AppError> {
        let res = Invite::update_many()
            .col_expr(Column::Used, Expr::value(true))
            .filter(Column::PatientId.eq(patient_id))
            .filter(Column::CaregiverEmail.eq(caregiver_email))
            .filter(Column::Used.eq(false))
            .exec(&self.database_connection)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn create_invite(
        &self,
        patient_id: Uuid,
        caregiver_email: &str,
        code_hash: &str,
        expires_at: chrono::DateTime<Utc>,
    ) -> Result<Uuid, AppError> {
        let id = token::new_id();
        Invite::insert(InviteActive {
            id: Set(id),
            patient_id: Set(patient_id),
            caregiver_email: Set(caregiver_email.to_string()),
            code_hash: Set(code_hash.to_string()),
            used: Set(false),
            expires_at: Set(expires_at),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(id)
    }

    /// Newest unused, unexpired invite matching this patient + digest. Recency
    /// ordering is the tie-breaker when several rows exist.
    pub async fn find_live_invite(
        &self,
        patient_id: Uuid,
        code_hash: &str,
    ) -> Result<Option<InviteModel>, AppError> {
        Ok(Invite::find()
            .filter(Column::PatientId.eq(patient_id))
            .filter(Column::CodeHash.eq(code_hash))
            .filter(Column::Used.eq(false))
            .filter(Column::ExpiresAt.gt(Utc::now()))
            .order_by_desc(Column::CreatedAt)
            .limit(1)
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_invite(&self, id: &Uuid) -> Result<Option<InviteModel>, AppError> {
        Ok(Invite::find_by_id(*id)
            .one(&self.database_connection)
            .await?)
    }

    pub async fn list_open_invites(&self, patient_id: Uuid) -> Result<Vec<InviteModel>, AppError> {
        Ok(Invite::find()
            .filter(Column::PatientId.eq(patient_id))
            .filter(Column::Used.eq(false))
            .filter(Column::ExpiresAt.gt(Utc::now()))
            .all(&self.database_connection)
            .await?)
    }
}
