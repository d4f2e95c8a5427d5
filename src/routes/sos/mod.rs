pub mod alert;
pub mod contacts;
