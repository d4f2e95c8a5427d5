use crate::db::postgres_service::PostgresService;
use crate::types::caregiver::SuccessResponse;
use crate::types::error::AppError;
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::sos::RTrustedContact;
use crate::utils::auth::authenticate;
use crate::utils::email::is_valid_email;
use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[post("/contacts")]
async fn add_contact(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RTrustedContact>,
    tok: BearerAuth,
) -> ApiResult<SuccessResponse> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    if !is_valid_email(data.email.trim()) {
        return Err(AppError::Validation("invalid email address".to_string()));
    }

    db.add_trusted_contact(caller.id, &data.email).await?;

    Ok(ApiResponse::Created(SuccessResponse { success: true }))
}

#[get("/contacts")]
async fn list_contacts(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tok: BearerAuth,
) -> ApiResult<Vec<entity::trusted_contact::Model>> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    let contacts = db.list_trusted_contacts(caller.id).await?;
    Ok(ApiResponse::Ok(contacts))
}
