use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::sos::{RSosAlert, SosRes};
use crate::utils::auth::authenticate;
use crate::utils::mail::{mail_sos, Mailer};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;

/// Panic button: one email to the linked caregiver and every trusted contact.
#[post("")]
async fn send_alert(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    mailer: web::Data<Mailer>,
    data: web::Json<RSosAlert>,
    tok: BearerAuth,
) -> ApiResult<SosRes> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    let recipients = db.sos_recipients(caller.id).await?;
    if recipients.is_empty() {
        return Err(AppError::BadRequest(
            "no recipients configured".to_string(),
        ));
    }
    let count = recipients.len();

    let message = data
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or("I need urgent help");

    mail_sos(
        &mailer,
        recipients,
        &caller.name,
        message,
        data.location.as_deref(),
    )
    .await
    .map_err(|e| AppError::Internal(format!("could not send alert email: {e}")))?;

    info!("SOS alert sent to {count} recipient(s)");

    Ok(ApiResponse::Ok(SosRes {
        success: true,
        recipients: count,
    }))
}
