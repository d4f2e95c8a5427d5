pub mod contacts;
pub mod geofence;
pub mod invite;
pub mod link;
pub mod postgres_service;
pub mod profile;
pub mod progress;
