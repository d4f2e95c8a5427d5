pub mod caregiver_invite;
pub mod caregiver_link;
pub mod game_session;
pub mod geofence_event;
pub mod patient_location;
pub mod profile;
pub mod safe_zone;
pub mod trusted_contact;

/*
 Profiles are created by an admin and carry a role (patient or caregiver).
 A patient invites a caregiver by email; the caregiver receives a 6-digit
 code out of band. Confirming the code creates the 1:1 caregiver_link.
 Everything else (geofence, SOS, progress, music) hangs off that link.
 */
