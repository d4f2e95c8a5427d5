use actix_web::{web, App};
use chrono::NaiveDate;
use companion_api::config::EnvConfig;
use companion_api::{
    db::postgres_service::PostgresService,
    types::{identity::Role, token::TokenType, user::DBProfileCreate},
    utils::mail::Mailer,
    utils::token::{construct_token, encrypt, new_token},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        self.create_app_with_config(super::get_test_config())
    }

    #[allow(dead_code)]
    pub fn create_app_with_config(
        &self,
        config: EnvConfig,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let mailer = Mailer::new(&config.mail);
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(config))
            .app_data(web::Data::new(mailer))
            .configure(companion_api::routes::configure_routes)
    }

    /// Provisions a profile directly in the store and returns its id plus a
    /// valid bearer token.
    #[allow(dead_code)]
    pub async fn create_test_profile(
        &self,
        role: Role,
        email: Option<String>,
        birth_date: Option<NaiveDate>,
    ) -> (Uuid, String) {
        let secret = new_token(TokenType::User);
        let auth_hash = encrypt(&secret).expect("Failed to encrypt token");
        let random_id = Uuid::new_v4();

        let email = email.unwrap_or_else(|| format!("{}-{}@test.com", role.as_str(), random_id));

        let id = self
            .db
            .create_profile(DBProfileCreate {
                name: format!("Test {}", role.as_str()),
                email,
                role,
                birth_date,
                auth_hash,
            })
            .await
            .expect("Failed to create profile");

        let token = construct_token(&id.to_string(), &secret);
        (id, token)
    }

    #[allow(dead_code)]
    pub async fn create_test_patient(&self) -> (Uuid, String) {
        self.create_test_profile(Role::Patient, None, None).await
    }

    #[allow(dead_code)]
    pub async fn create_test_caregiver(&self) -> (Uuid, String) {
        self.create_test_profile(Role::Caregiver, None, None).await
    }

    /// Links a caregiver to a patient through the store, consuming a fresh
    /// invite, so tests past the linking protocol can start from a linked pair.
    #[allow(dead_code)]
    pub async fn link_pair(&self, caregiver_id: Uuid, patient_id: Uuid) {
        let invite_id = self
            .db
            .create_invite(
                patient_id,
                "linked-caregiver@test.com",
                "0000000000000000000000000000000000000000000000000000000000000000",
                chrono::Utc::now() + chrono::Duration::minutes(15),
            )
            .await
            .expect("Failed to create invite");
        self.db
            .create_link_consuming_invite(caregiver_id, patient_id, invite_id)
            .await
            .expect("Failed to create link");
    }
}
