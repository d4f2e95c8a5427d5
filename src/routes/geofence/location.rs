use crate::db::postgres_service::PostgresService;
use crate::types::caregiver::SuccessResponse;
use crate::types::error::AppError;
use crate::types::geofence::RLocationReport;
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[put("/location")]
async fn report_location(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RLocationReport>,
    tok: BearerAuth,
) -> ApiResult<SuccessResponse> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    if !(-90.0..=90.0).contains(&data.lat) || !(-180.0..=180.0).contains(&data.lng) {
        return Err(AppError::Validation("coordinates out of range".to_string()));
    }

    db.upsert_location(caller.id, data.lat, data.lng).await?;

    Ok(ApiResponse::Ok(SuccessResponse { success: true }))
}
