use crate::db::postgres_service::PostgresService;
use crate::types::caregiver::SuccessResponse;
use crate::types::error::AppError;
use crate::types::geofence::RSafeZone;
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use actix_web::{get, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

/// The linked caregiver defines (or moves) the patient's safe zone.
#[put("/zone")]
async fn put_zone(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RSafeZone>,
    tok: BearerAuth,
) -> ApiResult<SuccessResponse> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Caregiver {
        return Err(AppError::Forbidden);
    }

    let link = db
        .get_link_for_caregiver(caller.id)
        .await?
        .ok_or_else(|| AppError::NotFound("no patient linked".to_string()))?;

    if data.radius_m <= 0.0 {
        return Err(AppError::Validation("radius must be positive".to_string()));
    }
    if !(-90.0..=90.0).contains(&data.center_lat) || !(-180.0..=180.0).contains(&data.center_lng) {
        return Err(AppError::Validation("coordinates out of range".to_string()));
    }

    db.upsert_safe_zone(
        link.patient_id,
        caller.id,
        data.center_lat,
        data.center_lng,
        data.radius_m,
    )
    .await?;

    Ok(ApiResponse::Ok(SuccessResponse { success: true }))
}

#[get("/zone")]
async fn get_zone(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tok: BearerAuth,
) -> ApiResult<entity::safe_zone::Model> {
    let caller = authenticate(&db, tok.token()).await?;

    let patient_id = match caller.role {
        Role::Patient => caller.id,
        Role::Caregiver => {
            db.get_link_for_caregiver(caller.id)
                .await?
                .ok_or_else(|| AppError::NotFound("no patient linked".to_string()))?
                .patient_id
        }
    };

    let zone = db
        .get_safe_zone(patient_id)
        .await?
        .ok_or_else(|| AppError::NotFound("no safe zone defined".to_string()))?;

    Ok(ApiResponse::Ok(zone))
}
