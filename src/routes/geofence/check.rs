use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::geofence::GeofenceCheckRes;
use crate::types::identity::Role;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::auth::authenticate;
use crate::utils::geo::distance_m;
use crate::utils::mail::{mail_geofence_alert, Mailer};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

const ALERT_COOLDOWN_MINUTES: i64 = 10;

/// Evaluates the caller's latest reported position against their safe zone.
/// On a transition the event is recorded; leaving the zone additionally mails
/// the caregiver, rate-limited against GPS jitter.
#[post("/check")]
async fn check_safe_zone(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    mailer: web::Data<Mailer>,
    tok: BearerAuth,
) -> ApiResult<GeofenceCheckRes> {
    let caller = authenticate(&db, tok.token()).await?;
    if caller.role != Role::Patient {
        return Err(AppError::Forbidden);
    }

    let Some(zone) = db.get_safe_zone(caller.id).await? else {
        return Ok(ApiResponse::Ok(GeofenceCheckRes::no_zone()));
    };

    let location = db
        .get_location(caller.id)
        .await?
        .ok_or_else(|| AppError::BadRequest("no location reported yet".to_string()))?;

    let distance = distance_m(location.lat, location.lng, zone.center_lat, zone.center_lng);
    let is_inside = distance <= zone.radius_m;

    let state_changed = is_inside != location.is_inside_safe_zone;
    let mut email_sent = false;

    if state_changed {
        let event_type = if is_inside { "ENTER" } else { "EXIT" };
        db.insert_geofence_event(
            caller.id,
            zone.caregiver_id,
            event_type,
            Some(location.lat),
            Some(location.lng),
        )
        .await?;

        let mut alert_stamp = None;
        if !is_inside {
            let cooled_down = match location.last_alert_sent_at {
                None => true,
                Some(last) => (Utc::now() - last).num_minutes() >= ALERT_COOLDOWN_MINUTES,
            };
            if cooled_down {
                let caregiver = db.get_profile_by_id(&zone.caregiver_id).await?;
                match mail_geofence_alert(
                    &mailer,
                    &caregiver.email,
                    event_type,
                    location.lat,
                    location.lng,
                )
                .await
                {
                    Ok(()) => email_sent = true,
                    Err(e) => error!("geofence alert delivery failed: {e}"),
                }
                // Stamped on attempt, not on success, so a mail outage cannot
                // turn GPS jitter into a retry storm.
                alert_stamp = Some(Utc::now());
            } else {
                info!("skipping exit alert, cooldown active");
            }
        }

        db.set_location_state(caller.id, is_inside, alert_stamp)
            .await?;
    }

    Ok(ApiResponse::Ok(GeofenceCheckRes {
        success: true,
        message: None,
        is_inside: Some(is_inside),
        distance_m: Some(distance),
        state_changed: Some(state_changed),
        email_sent: Some(email_sent),
    }))
}
