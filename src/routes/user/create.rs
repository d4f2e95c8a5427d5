use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenType;
use crate::types::user::{DBProfileCreate, RUserCreate, UserCreateRes};
use crate::utils::email::is_valid_email;
use crate::utils::token::{construct_token, encrypt, new_token};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

/// Admin provisioning: creates a profile with a role and hands back the only
/// copy of the bearer token.
#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if !is_valid_email(body.email.trim()) {
        return Err(AppError::Validation("invalid email address".to_string()));
    }

    let secret = new_token(TokenType::User);
    let auth_hash =
        encrypt(&secret).map_err(|_| AppError::Internal("token hashing failed".to_string()))?;

    let id = db
        .create_profile(DBProfileCreate {
            name: body.name.clone(),
            email: body.email.clone(),
            role: body.role,
            birth_date: body.birth_date,
            auth_hash,
        })
        .await?;

    let token = construct_token(&id.to_string(), &secret);

    Ok(ApiResponse::Created(UserCreateRes { id, token }))
}
