use crate::db::postgres_service::PostgresService;
use crate::types::caregiver::SuccessResponse;
use crate::types::error::AppError;
use crate::types::geofence::RGeofenceEvent;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

/// Logs a geofence event against the linked pair. Patients log for
/// themselves; caregivers may log for a patient they are linked to.
#[post("/event")]
async fn log_event(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RGeofenceEvent>,
    tok: BearerAuth,
) -> ApiResult<SuccessResponse> {
    let caller = authenticate(&db, tok.token()).await?;

    if data.event_type.trim().is_empty() {
        return Err(AppError::BadRequest("missing event type".to_string()));
    }

    let (patient_id, caregiver_id): (Uuid, Uuid) =
        if let Some(link) = db.get_link_for_patient(caller.id).await? {
            (caller.id, link.caregiver_id)
        } else if let Some(patient_id) = data.patient_id {
            match db.get_link_between(caller.id, patient_id).await? {
                Some(_) => (patient_id, caller.id),
                None => {
                    return Err(AppError::NotFound(
                        "no caregiver linked or invalid permissions".to_string(),
                    ))
                }
            }
        } else {
            return Err(AppError::NotFound(
                "no caregiver linked or invalid permissions".to_string(),
            ));
        };

    db.insert_geofence_event(
        patient_id,
        caregiver_id,
        data.event_type.trim(),
        data.lat,
        data.lng,
    )
    .await?;

    Ok(ApiResponse::Ok(SuccessResponse { success: true }))
}

#[get("/events")]
async fn list_events(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tok: BearerAuth,
) -> ApiResult<Vec<entity::geofence_event::Model>> {
    let caller = authenticate(&db, tok.token()).await?;
    let events = db.list_events_for_caregiver(caller.id, 50).await?;
    Ok(ApiResponse::Ok(events))
}
