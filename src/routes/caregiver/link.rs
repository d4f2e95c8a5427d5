use crate::db::postgres_service::PostgresService;
use crate::types::caregiver::LinkState;
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

/// Read-only; the UI polls this after issuance and confirmation.
#[get("/link")]
async fn link_state(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tok: BearerAuth,
) -> ApiResult<LinkState> {
    let caller = authenticate(&db, tok.token()).await?;

    let state = match caller.role {
        Role::Patient => match db.get_link_for_patient(caller.id).await? {
            None => LinkState::unlinked(),
            Some(link) => {
                let caregiver = db.get_profile_by_id(&link.caregiver_id).await?;
                LinkState {
                    linked: true,
                    caregiver_email: Some(caregiver.email),
                    caregiver_name: Some(caregiver.name),
                    patient_id: None,
                    patient_name: None,
                }
            }
        },
        Role::Caregiver => match db.get_link_for_caregiver(caller.id).await? {
            None => LinkState::unlinked(),
            Some(link) => {
                let patient = db.get_profile_by_id(&link.patient_id).await?;
                LinkState {
                    linked: true,
                    caregiver_email: None,
                    caregiver_name: None,
                    patient_id: Some(patient.id),
                    patient_name: Some(patient.name),
                }
            }
        },
    };

    Ok(ApiResponse::Ok(state))
}
