// tavola-client/tests/submit_flow.rs
// Submit-flow tests against stub booking services.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::json;
use tavola_client::{ClientConfig, FALLBACK_FAILURE_MESSAGE, ReservationForm, SubmitOutcome};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn filled_form() -> ReservationForm {
    let mut form = ReservationForm::new();
    form.set_name("Ada Lovelace");
    form.set_email("ada@example.com");
    form.set_party_size("4");
    form.set_date("2025-03-12");
    assert!(form.select_time("19:00"));
    form
}

#[tokio::test]
async fn test_confirmed_booking_reports_both_values_and_clears_form() {
    let router = Router::new().route(
        "/api/reservations",
        post(|| async {
            (
                StatusCode::CREATED,
                Json(json!({"id": 42, "table_number": 7})),
            )
        }),
    );
    let base = spawn(router).await;
    let client = ClientConfig::new(base).build_http_client();

    let mut form = filled_form();
    let outcome = form.submit(&client).await;

    match &outcome {
        SubmitOutcome::Confirmed(conf) => {
            assert_eq!(conf.id, 42);
            assert_eq!(conf.table_number, 7);
        }
        other => panic!("expected confirmation, got {other:?}"),
    }
    let message = outcome.user_message();
    assert!(message.contains("42"), "message was: {message}");
    assert!(message.contains("7"), "message was: {message}");

    // success clears the form and releases the submitting flag
    assert!(!form.is_submitting());
    assert!(form.draft().name.is_empty());
    assert!(form.draft().date.is_empty());
    assert!(form.time().is_empty());
}

#[tokio::test]
async fn test_service_failure_message_surfaces_verbatim() {
    let router = Router::new().route(
        "/api/reservations",
        post(|| async { (StatusCode::CONFLICT, Json(json!({"error": "Fully booked"}))) }),
    );
    let base = spawn(router).await;
    let client = ClientConfig::new(base).build_http_client();

    let mut form = filled_form();
    let outcome = form.submit(&client).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            message: "Fully booked".to_string()
        }
    );
    assert_eq!(outcome.user_message(), "Fully booked");

    // failure keeps the form for a manual retry
    assert!(!form.is_submitting());
    assert_eq!(form.draft().name, "Ada Lovelace");
    assert_eq!(form.time(), "19:00");
}

#[tokio::test]
async fn test_empty_failure_body_falls_back_to_generic_message() {
    let router = Router::new().route(
        "/api/reservations",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn(router).await;
    let client = ClientConfig::new(base).build_http_client();

    let mut form = filled_form();
    let outcome = form.submit(&client).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            message: FALLBACK_FAILURE_MESSAGE.to_string()
        }
    );
    assert!(!outcome.user_message().is_empty());
    assert_eq!(form.draft().email, "ada@example.com");
}

#[tokio::test]
async fn test_invalid_draft_makes_no_network_call() {
    let hit = Arc::new(AtomicBool::new(false));
    let flag = hit.clone();
    let router = Router::new().route(
        "/api/reservations",
        post(move || {
            let flag = flag.clone();
            async move {
                flag.store(true, Ordering::SeqCst);
                StatusCode::CREATED
            }
        }),
    );
    let base = spawn(router).await;
    let client = ClientConfig::new(base).build_http_client();

    let mut form = filled_form();
    form.set_email("not-an-email");
    let outcome = form.submit(&client).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(outcome.user_message(), "Please check your inputs.");
    assert!(!hit.load(Ordering::SeqCst), "validator must gate the wire");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_transport_failure_releases_submitting_flag() {
    // nothing listens here; connection is refused
    let client = ClientConfig::new("http://127.0.0.1:1")
        .with_timeout(2)
        .build_http_client();

    let mut form = filled_form();
    let outcome = form.submit(&client).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            message: FALLBACK_FAILURE_MESSAGE.to_string()
        }
    );
    assert!(!form.is_submitting());
    assert_eq!(form.draft().name, "Ada Lovelace");
}
