use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize)]
pub enum TokenType {
    User,
    Admin,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::User => write!(f, "user"),
            TokenType::Admin => write!(f, "admin"),
        }
    }
}
