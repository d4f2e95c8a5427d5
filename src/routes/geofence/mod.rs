pub mod check;
pub mod event;
pub mod location;
pub mod zone;
