use crate::db::postgres_service::PostgresService;
use crate::types::caregiver::{RInviteCreate, SuccessResponse};
use crate::types::error::AppError;
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use crate::utils::code::{hash_invite_code, new_invite_code};
use crate::utils::email::{is_valid_email, normalize_email};
use crate::utils::mail::{mail_invite_code, Mailer};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{error, info};

const INVITE_TTL_MINUTES: i64 = 15;

#[post("/invite")]
async fn create_invite(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    mailer: web::Data<Mailer>,
    data: web::Json<RInviteCreate>,
    tok: BearerAuth,
) -> ApiResult<SuccessResponse> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    if data.caregiver_email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "caregiver email is required".to_string(),
        ));
    }
    let caregiver_email = normalize_email(&data.caregiver_email);
    if !is_valid_email(&caregiver_email) {
        return Err(AppError::BadRequest("invalid email address".to_string()));
    }

    // The target must already be registered with the caregiver role; the code
    // goes to an address we do not control, so confirmation re-checks this.
    let caregiver = db
        .find_caregiver_by_email(&caregiver_email)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(
                "caregiver must register first with the caregiver role".to_string(),
            )
        })?;

    if caregiver.id == caller.id {
        return Err(AppError::BadRequest(
            "you cannot link to yourself".to_string(),
        ));
    }

    if db.get_link_for_patient(caller.id).await?.is_some() {
        return Err(AppError::BadRequest(
            "you already have a caregiver linked".to_string(),
        ));
    }
    if db.get_link_for_caregiver(caregiver.id).await?.is_some() {
        return Err(AppError::BadRequest(
            "this caregiver is already linked to another patient".to_string(),
        ));
    }

    // Retire any open code for this target before issuing a new one.
    let retired = db
        .invalidate_open_invites(caller.id, &caregiver_email)
        .await?;
    if retired > 0 {
        info!("retired {retired} open invite(s) before reissue");
    }

    let code = new_invite_code();
    let code_hash = hash_invite_code(&code);
    let expires_at = Utc::now() + Duration::minutes(INVITE_TTL_MINUTES);

    db.create_invite(caller.id, &caregiver_email, &code_hash, expires_at)
        .await?;

    // The invite row stays on delivery failure; re-issuing retires it and
    // sends a fresh code.
    if let Err(e) = mail_invite_code(&mailer, &caregiver_email, &code).await {
        error!("invite code delivery failed: {e}");
        return Err(AppError::Internal(
            "could not send the invite email".to_string(),
        ));
    }

    Ok(ApiResponse::Ok(SuccessResponse { success: true }))
}
