pub mod config;
pub mod db;
pub mod music;
pub mod routes;
pub mod types;
pub mod utils;
