//! Unit tests for the ticket id path extractor

use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use ticket_support_api::api::TicketPath;
use tower::ServiceExt;
use uuid::Uuid;

async fn echo_ticket_id(TicketPath(ticket_id): TicketPath) -> String {
    match ticket_id {
        Some(ticket_id) => ticket_id.to_string(),
        None => "none".to_owned(),
    }
}

async fn extract(uri: &str) -> (StatusCode, String) {
    let app = Router::new().route("/:id", get(echo_ticket_id));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_ticket_path_valid_uuid() {
    let ticket_id = Uuid::new_v4();

    let (status, body) = extract(&format!("/{ticket_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ticket_id.to_string());
}

#[tokio::test]
async fn test_ticket_path_malformed_id_is_none() {
    let (status, body) = extract("/abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "none");
}

#[tokio::test]
async fn test_ticket_path_without_route_params() {
    let req = Request::builder().uri("/abc").body(()).unwrap();

    let (mut parts, _) = req.into_parts();
    let result = TicketPath::from_request_parts(&mut parts, &()).await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert!(err.message.contains("not found"));
}
