pub mod auth;
pub mod code;
pub mod email;
pub mod geo;
pub mod mail;
pub mod token;
