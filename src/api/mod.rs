use crate::core::errors::ServiceError;
use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use log::error;
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

pub mod agents;
pub mod knowledge;
pub mod messages;
pub mod tickets;

/// All `/api` routes.
pub fn router() -> Router {
    Router::new()
        .nest("/tickets", tickets::router().merge(messages::router()))
        .nest("/agentes", agents::router())
        .nest("/conhecimento", knowledge::router())
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug)]
struct ErrorBody {
    erro: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { erro: self.message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Storage(e) => {
                error!("{e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        ApiError::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

/// JSON request body whose rejections are reported as `400` with the usual error body.
#[derive(FromRequest, Debug)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Short confirmation returned by update and delete.
#[derive(Serialize, Debug)]
pub struct Ack {
    pub mensagem: &'static str,
}

/// `:id` path segment naming a ticket.
///
/// Holds `None` when the segment isn't a UUID: such an id names no ticket, and each
/// route decides what that means (empty transcript, plain ack or 404).
#[derive(Debug)]
pub struct TicketPath(pub Option<Uuid>);

pub fn ticket_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "ticket not found")
}

#[async_trait]
impl<S> FromRequestParts<S> for TicketPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, ApiError> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ticket_not_found())?;

        Ok(TicketPath(Uuid::from_str(&raw).ok()))
    }
}
