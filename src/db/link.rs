use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::caregiver_invite::{ActiveModel as InviteActive, Entity as Invite};
use entity::caregiver_link::{
    ActiveModel as LinkActive, Column, Entity as Link, Model as LinkModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn get_link_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Option<LinkModel>, AppError> {
        Ok(Link::find()
            .filter(Column::PatientId.eq(patient_id))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_link_for_caregiver(
        &self,
        caregiver_id: Uuid,
    ) -> Result<Option<LinkModel>, AppError> {
        Ok(Link::find()
            .filter(Column::CaregiverId.eq(caregiver_id))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_link_between(
        &self,
        caregiver_id: Uuid,
        patient_id: Uuid,
    ) -> Result<Option<LinkModel>, AppError> {
        Ok(Link::find()
            .filter(Column::CaregiverId.eq(caregiver_id))
            .filter(Column::PatientId.eq(patient_id))
            .one(&self.database_connection)
            .await?)
    }

    /// Link insert and invite consumption, sequenced link-first inside one
    /// transaction. If a concurrent racer wins, the unique index on either
    /// side rejects this insert and we surface the business error instead of
    /// a raw store fault. Even without the transaction the ordering is safe:
    /// a link without a consumed invite still trips the already-linked guard
    /// on the next attempt.
    pub async fn create_link_consuming_invite(
        &self,
        caregiver_id: Uuid,
        patient_id: Uuid,
        invite_id: Uuid,
    ) -> Result<Uuid, AppError> {
        let txn = self.database_connection.begin().await?;

        let id = token::new_id();
        let insert = Link::insert(LinkActive {
            id: Set(id),
            caregiver_id: Set(caregiver_id),
            patient_id: Set(patient_id),
            created_at: Set(Utc::now()),
        })
        .exec(&txn)
        .await;

        if let Err(err) = insert {
            txn.rollback().await?;
            if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::BadRequest("already linked".to_string()));
            }
            return Err(err.into());
        }

        let invite = Invite::find_by_id(invite_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Invite not found".into()))?;
        let mut am: InviteActive = invite.into();
        am.used = Set(true);
        am.update(&txn).await?;

        txn.commit().await?;
        Ok(id)
    }
}
