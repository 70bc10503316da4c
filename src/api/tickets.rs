//! Ticket endpoints

use crate::api::{Ack, ApiJson, ApiResult, TicketPath, ticket_not_found};
use crate::core::traits::{NewTicket, TicketService};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route(
            "/:id",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
}

async fn list_tickets(
    Inject(ticket_service): Inject<dyn TicketService>,
) -> ApiResult<Json<Vec<schemas::Ticket>>> {
    let tickets = ticket_service.list_tickets().await?;

    Ok(Json(
        tickets.into_iter().map(schemas::Ticket::from).collect(),
    ))
}

async fn create_ticket(
    Inject(ticket_service): Inject<dyn TicketService>,
    ApiJson(create_ticket): ApiJson<schemas::CreateTicket>,
) -> ApiResult<(StatusCode, Json<schemas::Ticket>)> {
    let ticket = ticket_service
        .create_ticket(NewTicket::from(create_ticket))
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into())))
}

async fn get_ticket(
    Inject(ticket_service): Inject<dyn TicketService>,
    TicketPath(ticket_id): TicketPath,
) -> ApiResult<Json<schemas::Ticket>> {
    let ticket_id = ticket_id.ok_or_else(ticket_not_found)?;
    let ticket = ticket_service.get_ticket(ticket_id).await?;

    Ok(Json(ticket.into()))
}

async fn update_ticket(
    Inject(ticket_service): Inject<dyn TicketService>,
    TicketPath(ticket_id): TicketPath,
    ApiJson(update): ApiJson<schemas::UpdateTicket>,
) -> ApiResult<Json<Ack>> {
    // a non-UUID id matches no row, same as an unknown one
    if let Some(ticket_id) = ticket_id {
        ticket_service
            .update_ticket(ticket_id, update.status, update.agent_id)
            .await?;
    }

    Ok(Json(Ack {
        mensagem: "ticket updated",
    }))
}

async fn delete_ticket(
    Inject(ticket_service): Inject<dyn TicketService>,
    TicketPath(ticket_id): TicketPath,
) -> ApiResult<Json<Ack>> {
    if let Some(ticket_id) = ticket_id {
        ticket_service.delete_ticket(ticket_id).await?;
    }

    Ok(Json(Ack {
        mensagem: "ticket deleted",
    }))
}

pub mod schemas {
    use crate::core::traits::NewTicket;
    use crate::infrastructure::entities;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Deserialize, Debug)]
    pub struct CreateTicket {
        #[serde(rename = "titulo")]
        pub title: Option<String>,
        #[serde(rename = "descricao")]
        pub description: Option<String>,
        #[serde(rename = "prioridade")]
        pub priority: Option<String>,
        #[serde(rename = "email_usuario")]
        pub requester_email: Option<String>,
    }

    impl From<CreateTicket> for NewTicket {
        fn from(ticket: CreateTicket) -> Self {
            NewTicket {
                title: ticket.title,
                description: ticket.description,
                priority: ticket.priority,
                requester_email: ticket.requester_email,
            }
        }
    }

    /// Both fields are written as given; an omitted field clears the column.
    #[derive(Deserialize, Debug)]
    pub struct UpdateTicket {
        pub status: Option<String>,
        #[serde(rename = "agente_id")]
        pub agent_id: Option<Uuid>,
    }

    #[derive(Serialize, Debug)]
    pub struct Ticket {
        pub id: Uuid,
        #[serde(rename = "titulo")]
        pub title: String,
        #[serde(rename = "descricao")]
        pub description: String,
        #[serde(rename = "prioridade")]
        pub priority: String,
        pub status: Option<String>,
        #[serde(rename = "email_usuario")]
        pub requester_email: String,
        #[serde(rename = "agente_id")]
        pub agent_id: Option<Uuid>,
        #[serde(rename = "criado_em")]
        pub created_at: DateTime<Utc>,
        #[serde(rename = "atualizado_em")]
        pub updated_at: DateTime<Utc>,
    }

    impl From<entities::Ticket> for Ticket {
        fn from(ticket: entities::Ticket) -> Self {
            Ticket {
                id: ticket.id,
                title: ticket.title,
                description: ticket.description,
                priority: ticket.priority,
                status: ticket.status,
                requester_email: ticket.requester_email,
                agent_id: ticket.agent_id,
                created_at: ticket.created_at,
                updated_at: ticket.updated_at,
            }
        }
    }
}
