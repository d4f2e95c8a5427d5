mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use serde_json::json;

// Obelisco, Buenos Aires. A point ~1.5km away sits well outside a 200m zone.
const ZONE_LAT: f64 = -34.6037;
const ZONE_LNG: f64 = -58.3816;
const FAR_LAT: f64 = -34.6170;
const FAR_LNG: f64 = -58.3820;

#[tokio::test]
async fn test_caregiver_defines_zone_and_patient_reads_it() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (patient_id, patient_token) = client.create_test_patient().await;
    let (caregiver_id, caregiver_token) = client.create_test_caregiver().await;
    client.link_pair(caregiver_id, patient_id).await;

    let req = test::TestRequest::put()
        .uri("/geofence/zone")
        .insert_header(("Authorization", format!("Bearer {}", caregiver_token)))
        .set_json(json!({ "centerLat": ZONE_LAT, "centerLng": ZONE_LNG, "radiusM": 200.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/geofence/zone")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["radius_m"], 200.0);
}

#[tokio::test]
async fn test_unlinked_caregiver_cannot_define_zone() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_caregiver_id, caregiver_token) = client.create_test_caregiver().await;

    let req = test::TestRequest::put()
        .uri("/geofence/zone")
        .insert_header(("Authorization", format!("Bearer {}", caregiver_token)))
        .set_json(json!({ "centerLat": ZONE_LAT, "centerLng": ZONE_LNG, "radiusM": 200.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_zone_rejects_bad_geometry() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (patient_id, _) = client.create_test_patient().await;
    let (caregiver_id, caregiver_token) = client.create_test_caregiver().await;
    client.link_pair(caregiver_id, patient_id).await;

    for body in [
        json!({ "centerLat": ZONE_LAT, "centerLng": ZONE_LNG, "radiusM": 0.0 }),
        json!({ "centerLat": 95.0, "centerLng": ZONE_LNG, "radiusM": 200.0 }),
        json!({ "centerLat": ZONE_LAT, "centerLng": 181.0, "radiusM": 200.0 }),
    ] {
        let req = test::TestRequest::put()
            .uri("/geofence/zone")
            .insert_header(("Authorization", format!("Bearer {}", caregiver_token)))
            .set_json(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }
}

#[tokio::test]
async fn test_check_without_zone_is_a_noop() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_patient_id, patient_token) = client.create_test_patient().await;

    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "No safe zone defined");
    assert!(body.get("isInside").is_none());
}

#[tokio::test]
async fn test_check_without_location_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (patient_id, patient_token) = client.create_test_patient().await;
    let (caregiver_id, _) = client.create_test_caregiver().await;
    client.link_pair(caregiver_id, patient_id).await;
    ctx.db
        .upsert_safe_zone(patient_id, caregiver_id, ZONE_LAT, ZONE_LNG, 200.0)
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exit_and_reentry_transitions() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let mail = common::spawn_mail_stub().await;
    let app = test::init_service(
        client.create_app_with_config(common::get_test_config_with_mail(&mail)),
    )
    .await;

    let (patient_id, patient_token) = client.create_test_patient().await;
    let (caregiver_id, _) = client.create_test_caregiver().await;
    client.link_pair(caregiver_id, patient_id).await;
    ctx.db
        .upsert_safe_zone(patient_id, caregiver_id, ZONE_LAT, ZONE_LNG, 200.0)
        .await
        .unwrap();

    // Inside the zone: no transition (state starts as inside).
    let req = test::TestRequest::put()
        .uri("/geofence/location")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .set_json(json!({ "lat": ZONE_LAT, "lng": ZONE_LNG }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["isInside"], true);
    assert_eq!(body["stateChanged"], false);
    assert_eq!(body["emailSent"], false);

    // Move outside: EXIT transition, alert attempted.
    let req = test::TestRequest::put()
        .uri("/geofence/location")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .set_json(json!({ "lat": FAR_LAT, "lng": FAR_LNG }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["isInside"], false);
    assert_eq!(body["stateChanged"], true);
    assert_eq!(body["emailSent"], true);
    assert!(body["distanceM"].as_f64().unwrap() > 200.0);

    // Still outside: no new transition, no new alert.
    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["stateChanged"], false);
    assert_eq!(body["emailSent"], false);

    // Back inside: ENTER transition, no email.
    let req = test::TestRequest::put()
        .uri("/geofence/location")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .set_json(json!({ "lat": ZONE_LAT, "lng": ZONE_LNG }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["isInside"], true);
    assert_eq!(body["stateChanged"], true);
    assert_eq!(body["emailSent"], false);

    // One EXIT and one ENTER landed in the caregiver's feed.
    let events = ctx
        .db
        .list_events_for_caregiver(caregiver_id, 50)
        .await
        .unwrap();
    let kinds: Vec<&str> = events.iter().map(|e| e.event_type.as_str()).collect();
    assert!(kinds.contains(&"EXIT"));
    assert!(kinds.contains(&"ENTER"));
    assert_eq!(events.len(), 2);
}

#[tokio::test]
async fn test_repeat_exit_within_cooldown_skips_email() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let mail = common::spawn_mail_stub().await;
    let app = test::init_service(
        client.create_app_with_config(common::get_test_config_with_mail(&mail)),
    )
    .await;

    let (patient_id, patient_token) = client.create_test_patient().await;
    let (caregiver_id, _) = client.create_test_caregiver().await;
    client.link_pair(caregiver_id, patient_id).await;
    ctx.db
        .upsert_safe_zone(patient_id, caregiver_id, ZONE_LAT, ZONE_LNG, 200.0)
        .await
        .unwrap();

    // First exit, alert attempted and stamped.
    ctx.db
        .upsert_location(patient_id, FAR_LAT, FAR_LNG)
        .await
        .unwrap();
    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["emailSent"], true);

    // Re-enter, then exit again right away. The transition is recorded but the
    // stamp is fresh, so the second alert is suppressed.
    ctx.db
        .upsert_location(patient_id, ZONE_LAT, ZONE_LNG)
        .await
        .unwrap();
    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    ctx.db
        .upsert_location(patient_id, FAR_LAT, FAR_LNG)
        .await
        .unwrap();
    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["stateChanged"], true);
    assert_eq!(body["emailSent"], false);
}

#[tokio::test]
async fn test_alert_outage_reports_email_not_sent() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    // Default config: the mail endpoint is a dead socket.
    let app = test::init_service(client.create_app()).await;

    let (patient_id, patient_token) = client.create_test_patient().await;
    let (caregiver_id, _) = client.create_test_caregiver().await;
    client.link_pair(caregiver_id, patient_id).await;
    ctx.db
        .upsert_safe_zone(patient_id, caregiver_id, ZONE_LAT, ZONE_LNG, 200.0)
        .await
        .unwrap();
    ctx.db
        .upsert_location(patient_id, FAR_LAT, FAR_LNG)
        .await
        .unwrap();

    // The transition is recorded but the response must not claim delivery.
    let req = test::TestRequest::post()
        .uri("/geofence/check")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["isInside"], false);
    assert_eq!(body["stateChanged"], true);
    assert_eq!(body["emailSent"], false);

    // The cooldown stamp is written on the attempt regardless.
    let location = ctx.db.get_location(patient_id).await.unwrap().unwrap();
    assert!(location.last_alert_sent_at.is_some());
}

#[tokio::test]
async fn test_event_logging_both_directions() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (patient_id, patient_token) = client.create_test_patient().await;
    let (caregiver_id, caregiver_token) = client.create_test_caregiver().await;
    client.link_pair(caregiver_id, patient_id).await;

    // Patient logs for themselves.
    let req = test::TestRequest::post()
        .uri("/geofence/event")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .set_json(json!({ "eventType": "EXIT", "lat": FAR_LAT, "lng": FAR_LNG }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Caregiver logs on behalf of the linked patient.
    let req = test::TestRequest::post()
        .uri("/geofence/event")
        .insert_header(("Authorization", format!("Bearer {}", caregiver_token)))
        .set_json(json!({ "eventType": "ENTER", "patientId": patient_id }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/geofence/events")
        .insert_header(("Authorization", format!("Bearer {}", caregiver_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_event_logging_requires_a_link() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_patient_id, patient_token) = client.create_test_patient().await;

    let req = test::TestRequest::post()
        .uri("/geofence/event")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .set_json(json!({ "eventType": "EXIT" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_location_report_rejects_out_of_range() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_patient_id, patient_token) = client.create_test_patient().await;

    let req = test::TestRequest::put()
        .uri("/geofence/location")
        .insert_header(("Authorization", format!("Bearer {}", patient_token)))
        .set_json(json!({ "lat": 91.0, "lng": 0.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
