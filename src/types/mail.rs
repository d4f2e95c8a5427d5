use serde::Serialize;

/// Resend API payload.
#[derive(Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
}

impl Default for SendEmail {
    fn default() -> Self {
        Self {
            from: "noreply@example.com".to_string(),
            to: vec![],
            subject: "".to_string(),
            html: None,
            text: None,
        }
    }
}
