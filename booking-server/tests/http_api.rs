//! HTTP API smoke tests
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`; no
//! socket is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use booking_server::api::build_app;
use booking_server::{Config, ServerState};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let state = ServerState::initialize(&Config::default());
    build_app(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn booking_body() -> Value {
    json!({
        "customerName": "John Smith",
        "phoneNumber": "9876543210",
        "email": "john@example.com",
        "numberOfGuests": 4,
        "bookingDate": "2026-12-25",
        "bookingTime": "19:30",
        "cuisinePreference": "Italian",
        "seatingPreference": "indoor"
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app().oneshot(get("/api/bookings/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("API is healthy"));
}

#[tokio::test]
async fn create_then_fetch_by_code() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/api/bookings", booking_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    let id = body["booking"]["bookingId"].as_str().unwrap().to_string();
    assert!(id.starts_with("VAIU-"));
    assert_eq!(body["booking"]["tableNumber"], json!(1));
    assert_eq!(body["booking"]["status"], json!("confirmed"));

    let response = app
        .clone()
        .oneshot(get(&format!("/api/bookings/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["booking"]["customerName"], json!("John Smith"));

    let response = app.oneshot(get("/api/bookings/VAIU-0000X")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_is_a_400_with_error_body() {
    let mut body = booking_body();
    body.as_object_mut().unwrap().remove("bookingDate");
    let response = app()
        .oneshot(post_json("/api/bookings", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn unknown_enum_value_gets_the_json_error_shape() {
    let mut body = booking_body();
    body["cuisinePreference"] = json!("French");
    let response = app()
        .oneshot(post_json("/api/bookings", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().unwrap().contains("unknown variant"));
}

#[tokio::test]
async fn full_slot_returns_409_with_suggestions() {
    let state = ServerState::initialize(&Config {
        total_tables: 1,
        ..Config::default()
    });
    let app = build_app(state);

    let response = app
        .clone()
        .oneshot(post_json("/api/bookings", booking_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json("/api/bookings", booking_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], json!("FULLY_BOOKED"));
    assert_eq!(body["suggestions"], json!(["20:00", "20:30", "21:00"]));
}

#[tokio::test]
async fn conversation_endpoints_round_trip() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/api/conversation", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let id = body["sessionId"].as_str().unwrap().to_string();
    assert!(body["prompt"].as_str().unwrap().contains("What is your name?"));

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/conversation/{id}/utterance"),
            json!({ "text": "John Smith" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["reply"].as_str().unwrap().contains("phone number"));
    assert_eq!(body["completed"], json!(false));

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/conversation/{id}/reset"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Ending the conversation drops it; further turns are a 404.
    let response = app
        .clone()
        .oneshot(delete(&format!("/api/conversation/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/conversation/{id}/utterance"),
            json!({ "text": "John Smith" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Unknown conversations are a 404.
    let response = app
        .oneshot(post_json(
            "/api/conversation/00000000-0000-0000-0000-000000000000/utterance",
            json!({ "text": "hello" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analytics_routes_return_data_envelopes() {
    let app = app();
    app.clone()
        .oneshot(post_json("/api/bookings", booking_body()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/analytics/bookings-per-day"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"][0]["count"], json!(1));

    let response = app
        .oneshot(get("/api/analytics/cuisine-popularity"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"][0]["cuisine"], json!("Italian"));
}
