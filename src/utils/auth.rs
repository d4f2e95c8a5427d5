use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::identity::{CallerIdentity, Role};
use crate::utils::token::{extract_token_parts, verify};

/// Resolves a bearer token to the caller's identity. Every failure collapses
/// to Unauthorized so the token format leaks nothing.
pub async fn authenticate(
    db: &PostgresService,
    token: &str,
) -> Result<CallerIdentity, AppError> {
    let (profile_id, secret) =
        extract_token_parts(token).ok_or(AppError::Unauthorized)?;

    let profile = db
        .get_profile_by_id(&profile_id)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    match verify(&secret, &profile.auth_hash) {
        Ok(true) => {}
        _ => return Err(AppError::Unauthorized),
    }

    let role = Role::parse(&profile.role).ok_or(AppError::Unauthorized)?;

    Ok(CallerIdentity {
        id: profile.id,
        role,
        name: profile.name,
        email: profile.email,
    })
}

/// Middleware validator for the admin-only provisioning scope.
pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(config) = req.app_data::<web::Data<EnvConfig>>() else {
        return Err((ErrorUnauthorized("Invalid token"), req));
    };
    if credentials.token() == config.admin_key {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}
