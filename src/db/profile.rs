use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, identity::Role, user::DBProfileCreate};
use crate::utils::{email::normalize_email, token};
use chrono::Utc;
use entity::profile::{ActiveModel as ProfileActive, Entity as Profile, Model as ProfileModel};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn profile_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(Profile::find()
            .filter(entity::profile::Column::Email.eq(normalize_email(email)))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_profile_by_id(&self, id: &Uuid) -> Result<ProfileModel, AppError> {
        Ok(Profile::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Profile does not exist".into()))?)
    }

    pub async fn get_profile_by_email(&self, email: &str) -> Result<ProfileModel, AppError> {
        Ok(Profile::find()
            .filter(entity::profile::Column::Email.eq(normalize_email(email)))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Profile does not exist".into()))?)
    }

    /// Caregiver resolution used by both the issuance and confirmation steps:
    /// the profile must exist AND carry the caregiver role.
    pub async fn find_caregiver_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ProfileModel>, AppError> {
        let profile = Profile::find()
            .filter(entity::profile::Column::Email.eq(normalize_email(email)))
            .one(&self.database_connection)
            .await?;
        Ok(profile.filter(|p| Role::parse(&p.role) == Some(Role::Caregiver)))
    }

    pub async fn create_profile(&self, payload: DBProfileCreate) -> Result<Uuid, AppError> {
        let email = normalize_email(&payload.email);
        if self.profile_exists_by_email(&email).await? {
            return Err(AppError::AlreadyExists);
        }
        let id = token::new_id();
        let now = Utc::now();

        Profile::insert(ProfileActive {
            id: Set(id),
            name: Set(payload.name),
            email: Set(email),
            role: Set(payload.role.as_str().to_string()),
            birth_date: Set(payload.birth_date),
            auth_hash: Set(payload.auth_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;

        Ok(id)
    }
}
