use crate::db::postgres_service::PostgresService;
use crate::music::{recommendations_for, Recommendation, DEFAULT_BIRTH_YEAR};
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::Datelike;
use std::sync::Arc;

/// Era-appropriate songs for the patient's formative decades. Caregivers get
/// the playlist of their linked patient.
#[get("")]
async fn recommendations(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tok: BearerAuth,
) -> ApiResult<Vec<Recommendation>> {
    let caller = authenticate(&db, tok.token()).await?;

    let birth_date = match caller.role {
        Role::Patient => db.get_profile_by_id(&caller.id).await?.birth_date,
        Role::Caregiver => match db.get_link_for_caregiver(caller.id).await? {
            Some(link) => db.get_profile_by_id(&link.patient_id).await?.birth_date,
            None => None,
        },
    };

    let birth_year = birth_date
        .map(|d| d.year())
        .unwrap_or(DEFAULT_BIRTH_YEAR);

    Ok(ApiResponse::Ok(recommendations_for(birth_year)))
}
