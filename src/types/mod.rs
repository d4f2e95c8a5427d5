pub mod caregiver;
pub mod error;
pub mod geofence;
pub mod identity;
pub mod mail;
pub mod progress;
pub mod response;
pub mod sos;
pub mod token;
pub mod user;
