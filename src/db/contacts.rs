use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::{email::normalize_email, token};
use chrono::Utc;
use entity::trusted_contact::{
    ActiveModel as ContactActive, Column, Entity as Contact, Model as ContactModel,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn add_trusted_contact(
        &self,
        patient_id: Uuid,
        email: &str,
    ) -> Result<Uuid, AppError> {
        let email = normalize_email(email);
        let exists = Contact::find()
            .filter(Column::PatientId.eq(patient_id))
            .filter(Column::Email.eq(email.clone()))
            .count(&self.database_connection)
            .await?
            > 0;
        if exists {
            return Err(AppError::AlreadyExists);
        }

        let id = token::new_id();
        Contact::insert(ContactActive {
            id: Set(id),
            patient_id: Set(patient_id),
            email: Set(email),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(id)
    }

    pub async fn list_trusted_contacts(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<ContactModel>, AppError> {
        Ok(Contact::find()
            .filter(Column::PatientId.eq(patient_id))
            .all(&self.database_connection)
            .await?)
    }

    /// Linked caregiver plus trusted contacts, deduplicated, for the SOS
    /// broadcast.
    pub async fn sos_recipients(&self, patient_id: Uuid) -> Result<Vec<String>, AppError> {
        let mut recipients: Vec<String> = Vec::new();

        if let Some(link) = self.get_link_for_patient(patient_id).await? {
            let caregiver = self.get_profile_by_id(&link.caregiver_id).await?;
            recipients.push(caregiver.email);
        }

        for contact in self.list_trusted_contacts(patient_id).await? {
            if !recipients.contains(&contact.email) {
                recipients.push(contact.email);
            }
        }

        Ok(recipients)
    }
}
