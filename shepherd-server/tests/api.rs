//! End-to-end route tests over an in-process router

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shepherd_server::core::{Config, ServerState};
use shepherd_server::routes;

fn app() -> Router {
    routes::build_app(ServerState::new(Config::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn member_payload(first: &str, last: &str) -> Value {
    json!({
        "firstName": first,
        "lastName": last,
        "email": format!("{}@example.com", first.to_lowercase()),
        "phone": "5551234567",
        "status": "Active"
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn member_create_and_paginated_list() {
    let app = app();
    for i in 0..12 {
        let (status, _) = send(
            &app,
            "POST",
            "/api/members",
            Some(member_payload(&format!("Name{i:02}"), "Pérez")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", "/api/members?page=2&pageSize=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 12);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn member_validation_errors_are_field_level() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(json!({
            "firstName": "A",
            "lastName": "Pérez",
            "email": "not-an-email",
            "phone": "123",
            "status": "New"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    let fields: Vec<&str> = body["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["firstName", "email", "phone"]);
}

#[tokio::test]
async fn member_detail_resolves_guide_name() {
    let app = app();
    let (_, guide) = send(&app, "POST", "/api/members", Some(member_payload("Carla", "Ruiz"))).await;
    let (_, gdi) = send(
        &app,
        "POST",
        "/api/gdis",
        Some(json!({"name": "GDI North", "guideId": guide["id"], "memberIds": []})),
    )
    .await;

    let mut payload = member_payload("Ana", "García");
    payload["assignedGDIId"] = gdi["id"].clone();
    let (status, member) = send(&app, "POST", "/api/members", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/members/{}", member["id"].as_str().unwrap());
    let (status, detail) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["gdiGuideName"], "Carla Ruiz");

    // The GDI roster gained the member id
    let uri = format!("/api/gdis/{}", gdi["id"].as_str().unwrap());
    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert!(
        fetched["memberIds"]
            .as_array()
            .unwrap()
            .contains(&member["id"])
    );
}

#[tokio::test]
async fn member_delete_is_a_status_transition() {
    let app = app();
    let (_, member) = send(&app, "POST", "/api/members", Some(member_payload("Ana", "García"))).await;
    let uri = format!("/api/members/{}", member["id"].as_str().unwrap());

    let (status, changed) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(changed, json!(true));

    let (status, kept) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(kept["status"], "Inactive");
}

#[tokio::test]
async fn series_generation_is_idempotent() {
    let app = app();
    let (status, series) = send(
        &app,
        "POST",
        "/api/meeting-series",
        Some(json!({
            "name": "Midweek prayer",
            "defaultTime": "19:30",
            "defaultLocation": "Main hall",
            "targetAttendeeGroups": ["allMembers"],
            "frequency": "Weekly",
            "weeklyDays": ["Monday", "Thursday"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!(
        "/api/meeting-series/{}/generate?from=2025-06-02&to=2025-06-29",
        series["id"].as_str().unwrap()
    );
    let (status, created) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created.as_array().unwrap().len(), 8);

    // Same window again: everything already materialized
    let (status, repeated) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(repeated.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn incomplete_recurrence_rule_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/meeting-series",
        Some(json!({
            "name": "Board meeting",
            "defaultTime": "18:00",
            "defaultLocation": "Office",
            "targetAttendeeGroups": ["leaders"],
            "frequency": "Monthly",
            "monthlyRuleType": "DayOfMonth"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["issues"][0]["field"], "monthlyDayOfMonth");
}

#[tokio::test]
async fn attendance_upsert_overwrites_in_place() {
    let app = app();
    let (_, member) = send(&app, "POST", "/api/members", Some(member_payload("Ana", "García"))).await;
    let (_, meeting) = send(
        &app,
        "POST",
        "/api/meetings",
        Some(json!({
            "seriesId": "",
            "name": "Special service",
            "date": "2025-06-15",
            "time": "10:00",
            "location": "Sanctuary",
            "attendeeUids": [member["id"]]
        })),
    )
    .await;

    let uri = format!(
        "/api/meetings/{}/attendance/{}",
        meeting["id"].as_str().unwrap(),
        member["id"].as_str().unwrap()
    );
    let (status, first) = send(&app, "PUT", &uri, Some(json!({"attended": true}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"attended": false, "notes": "called in sick"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], second["id"]);

    let uri = format!("/api/meetings/{}/attendance", meeting["id"].as_str().unwrap());
    let (_, records) = send(&app, "GET", &uri, None).await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["attended"], json!(false));
}

#[tokio::test]
async fn unknown_attendee_rejected_on_meeting_create() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/meetings",
        Some(json!({
            "seriesId": "",
            "name": "Special service",
            "date": "2025-06-15",
            "time": "10:00",
            "location": "Sanctuary",
            "attendeeUids": ["ghost"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["issues"][0]["field"], "attendeeUids");
}
