use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct RSosAlert {
    pub message: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SosRes {
    pub success: bool,
    pub recipients: usize,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RTrustedContact {
    pub email: String,
}
