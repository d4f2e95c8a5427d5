use reqwest::{Client, ClientBuilder};
use tracing::{error, info};

use crate::config::MailConfig;
use crate::types::mail::SendEmail;

/// Thin wrapper over the Resend HTTP API. Built once at startup from the
/// explicit mail config and shared as app data.
#[derive(Clone)]
pub struct Mailer {
    client: Client,
    endpoint: String,
    api_key: String,
    from: String,
}

impl Mailer {
    pub fn new(config: &MailConfig) -> Self {
        let client = ClientBuilder::new()
            .user_agent("companion-api/1.0 (+reqwest)")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build mail client");

        Mailer {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
        }
    }

    pub async fn send(&self, mut email: SendEmail) -> Result<(), String> {
        if email.from.is_empty() || email.from == SendEmail::default().from {
            email.from = self.from.clone();
        }

        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key) // do NOT log the key
            .json(&email)
            .send()
            .await
            .map_err(|e| format!("send failed: {e}"))?;

        let status = res.status();
        if status.is_success() {
            info!("mail accepted: {status}");
            Ok(())
        } else {
            let body = res.text().await.unwrap_or_default();
            error!("mail rejected: HTTP {status}: {body}");
            Err(format!("Resend API error: HTTP {status}"))
        }
    }
}

pub async fn mail_invite_code(mailer: &Mailer, to: &str, code: &str) -> Result<(), String> {
    mailer
        .send(SendEmail {
            to: vec![to.to_string()],
            subject: "Caregiver linking code".to_string(),
            html: Some(format!(
                "<p><b>Code:</b> {code}</p><p>Expires in 15 minutes.</p>"
            )),
            ..Default::default()
        })
        .await
}

pub async fn mail_geofence_alert(
    mailer: &Mailer,
    to: &str,
    event_type: &str,
    lat: f64,
    lng: f64,
) -> Result<(), String> {
    let (subject, message) = if event_type == "EXIT" {
        (
            "ALERT: patient left the safe zone",
            "The patient has LEFT the safe zone.",
        )
    } else {
        (
            "Patient entered the safe zone",
            "The patient has ENTERED the safe zone.",
        )
    };

    mailer
        .send(SendEmail {
            to: vec![to.to_string()],
            subject: subject.to_string(),
            html: Some(format!(
                "<h2>{subject}</h2>\
                 <p>{message}</p>\
                 <p><a href=\"https://www.google.com/maps/search/?api=1&query={lat},{lng}\">\
                 View location on map</a></p>\
                 <p>Coordinates: {lat}, {lng}</p>"
            )),
            ..Default::default()
        })
        .await
}

pub async fn mail_sos(
    mailer: &Mailer,
    recipients: Vec<String>,
    patient_name: &str,
    message: &str,
    location: Option<&str>,
) -> Result<(), String> {
    let location_line = location
        .map(|l| format!("<p><b>Approximate location:</b> {l}</p>"))
        .unwrap_or_default();

    mailer
        .send(SendEmail {
            to: recipients,
            subject: format!("SOS emergency: {patient_name}"),
            html: Some(format!(
                "<h1>Emergency alert (SOS)</h1>\
                 <p>Patient <b>{patient_name}</b> pressed the help button.</p>\
                 <p>\"{message}\"</p>\
                 {location_line}\
                 <p>This is an automated message. Please contact the patient \
                 or go to their location as soon as possible.</p>"
            )),
            ..Default::default()
        })
        .await
}
