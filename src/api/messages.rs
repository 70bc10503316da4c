//! Ticket chat endpoints

use crate::api::{ApiJson, ApiResult, TicketPath, ticket_not_found};
use crate::core::traits::MessageService;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/:id/mensagens", get(ticket_messages).post(post_message))
}

async fn ticket_messages(
    Inject(message_service): Inject<dyn MessageService>,
    TicketPath(ticket_id): TicketPath,
) -> ApiResult<Json<Vec<schemas::Message>>> {
    let Some(ticket_id) = ticket_id else {
        return Ok(Json(Vec::new()));
    };
    let messages = message_service.list_messages(ticket_id).await?;

    Ok(Json(
        messages.into_iter().map(schemas::Message::from).collect(),
    ))
}

async fn post_message(
    Inject(message_service): Inject<dyn MessageService>,
    TicketPath(ticket_id): TicketPath,
    ApiJson(message): ApiJson<schemas::CreateMessage>,
) -> ApiResult<(StatusCode, Json<schemas::Message>)> {
    // ticket ids are stored as UUIDs, so there is nowhere to put anything else
    let ticket_id = ticket_id.ok_or_else(ticket_not_found)?;
    let message = message_service
        .append_message(ticket_id, message.author_role, message.body)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

pub mod schemas {
    use crate::infrastructure::entities;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Deserialize, Debug)]
    pub struct CreateMessage {
        #[serde(rename = "usuario")]
        pub author_role: Option<String>,
        #[serde(rename = "mensagem")]
        pub body: Option<String>,
    }

    #[derive(Serialize, Debug)]
    pub struct Message {
        pub id: Uuid,
        pub ticket_id: Uuid,
        #[serde(rename = "usuario")]
        pub author_role: String,
        #[serde(rename = "mensagem")]
        pub body: String,
        #[serde(rename = "criado_em")]
        pub created_at: DateTime<Utc>,
    }

    impl From<entities::Message> for Message {
        fn from(message: entities::Message) -> Self {
            Message {
                id: message.id,
                ticket_id: message.ticket_id,
                author_role: message.author_role,
                body: message.body,
                created_at: message.created_at,
            }
        }
    }
}
