use crate::utils::auth::validate_admin_token;
use actix_web::web;

pub mod caregiver;
pub mod geofence;
pub mod health;
pub mod music;
pub mod progress;
pub mod sos;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth =
        actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/user").service(
            web::scope("/create")
                .service(user::create::create)
                .wrap(admin_auth),
        ),
    );
    cfg.service(
        web::scope("/caregiver")
            .service(caregiver::invite::create_invite)
            .service(caregiver::confirm::confirm_invite)
            .service(caregiver::link::link_state),
    );
    cfg.service(
        web::scope("/geofence")
            .service(geofence::event::log_event)
            .service(geofence::event::list_events)
            .service(geofence::location::report_location)
            .service(geofence::check::check_safe_zone)
            .service(geofence::zone::put_zone)
            .service(geofence::zone::get_zone),
    );
    cfg.service(
        web::scope("/sos")
            .service(sos::contacts::add_contact)
            .service(sos::contacts::list_contacts)
            .service(sos::alert::send_alert),
    );
    cfg.service(web::scope("/music").service(music::recommendations));
    cfg.service(
        web::scope("/progress")
            .service(progress::record_session)
            .service(progress::own_summary)
            .service(progress::patient_summary),
    );
}
