use crate::db::postgres_service::PostgresService;
use crate::types::caregiver::{RInviteConfirm, SuccessResponse};
use crate::types::error::AppError;
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use crate::utils::code::{hash_invite_code, is_six_digit_code};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;

#[post("/invite/confirm")]
async fn confirm_invite(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RInviteConfirm>,
    tok: BearerAuth,
) -> ApiResult<SuccessResponse> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    let code = data.code.trim();
    if !is_six_digit_code(code) {
        return Err(AppError::BadRequest("code must be 6 digits".to_string()));
    }

    // Idempotent guard against double-linking; also what a losing racer hits
    // on its retry.
    if db.get_link_for_patient(caller.id).await?.is_some() {
        return Err(AppError::BadRequest(
            "you already have a caregiver linked".to_string(),
        ));
    }

    // Never issued, already used and expired all collapse into one error so
    // the response does not reveal which it was.
    let code_hash = hash_invite_code(code);
    let invite = db
        .find_live_invite(caller.id, &code_hash)
        .await?
        .ok_or_else(|| AppError::BadRequest("invalid or expired code".to_string()))?;

    let caregiver = db
        .find_caregiver_by_email(&invite.caregiver_email)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(
                "caregiver not found or missing the caregiver role".to_string(),
            )
        })?;

    if db.get_link_for_caregiver(caregiver.id).await?.is_some() {
        return Err(AppError::BadRequest(
            "this caregiver is already linked to another patient".to_string(),
        ));
    }

    db.create_link_consuming_invite(caregiver.id, caller.id, invite.id)
        .await?;

    info!("caregiver link confirmed for patient {}", caller.id);

    Ok(ApiResponse::Ok(SuccessResponse { success: true }))
}
