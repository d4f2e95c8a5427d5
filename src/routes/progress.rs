use crate::db::postgres_service::PostgresService;
use crate::types::caregiver::SuccessResponse;
use crate::types::error::AppError;
use crate::types::identity::Role;
use crate::types::progress::{ProgressSummary, RGameSession};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

const GAME_TYPES: [&str; 3] = ["memory", "attention", "calculation"];

#[post("/session")]
async fn record_session(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RGameSession>,
    tok: BearerAuth,
) -> ApiResult<SuccessResponse> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    if !GAME_TYPES.contains(&data.game_type.as_str()) {
        return Err(AppError::Validation("unknown game type".to_string()));
    }
    if data.hits < 0 || data.errors < 0 || data.levels_completed < 0 || data.duration_seconds < 0 {
        return Err(AppError::Validation(
            "counters must be non-negative".to_string(),
        ));
    }

    db.insert_game_session(caller.id, data.into_inner()).await?;

    Ok(ApiResponse::Created(SuccessResponse { success: true }))
}

#[get("")]
async fn own_summary(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tok: BearerAuth,
) -> ApiResult<ProgressSummary> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    let summary = db.summarize_progress(caller.id).await?;
    Ok(ApiResponse::Ok(summary))
}

/// Report data for the exporter. Only the caregiver linked to this exact
/// patient may read it.
#[get("/{patient_id}")]
async fn patient_summary(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<ProgressSummary> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Caregiver {
        return Err(AppError::Forbidden);
    }

    let patient_id = path.into_inner();
    if db
        .get_link_between(caller.id, patient_id)
        .await?
        .is_none()
    {
        return Err(AppError::Forbidden);
    }

    let summary = db.summarize_progress(patient_id).await?;
    Ok(ApiResponse::Ok(summary))
}
