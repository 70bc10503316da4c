//! DI "Interfaces"

use crate::core::errors::ServiceResult;
use crate::infrastructure::entities;
use async_trait::async_trait;
use uuid::Uuid;

/// Fields a caller may supply when opening a ticket. Presence is checked by the service.
#[derive(Debug, Default, Clone)]
pub struct NewTicket {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub requester_email: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct NewArticle {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
}

#[async_trait]
pub trait TicketService: Send + Sync {
    /// Lists all tickets, newest first.
    async fn list_tickets(&self) -> ServiceResult<Vec<entities::Ticket>>;

    /// Opens a new ticket with status "open".
    ///
    /// Returns `Validation` if title, description or requester email is missing.
    async fn create_ticket(&self, ticket: NewTicket) -> ServiceResult<entities::Ticket>;

    /// Returns `NotFound` if no ticket has this id.
    async fn get_ticket(&self, ticket_id: Uuid) -> ServiceResult<entities::Ticket>;

    /// Overwrites status and assigned agent and bumps `updated_at`.
    ///
    /// Succeeds even when no ticket has this id.
    async fn update_ticket(
        &self,
        ticket_id: Uuid,
        status: Option<String>,
        agent_id: Option<Uuid>,
    ) -> ServiceResult<()>;

    /// Deletes the ticket row only; its messages stay behind.
    ///
    /// Succeeds even when no ticket has this id.
    async fn delete_ticket(&self, ticket_id: Uuid) -> ServiceResult<()>;
}

#[async_trait]
pub trait MessageService: Send + Sync {
    /// Chat transcript of a ticket, oldest first. Unknown tickets yield an empty list.
    async fn list_messages(&self, ticket_id: Uuid) -> ServiceResult<Vec<entities::Message>>;

    /// Appends a message. The ticket is not required to exist.
    async fn append_message(
        &self,
        ticket_id: Uuid,
        author_role: Option<String>,
        body: Option<String>,
    ) -> ServiceResult<entities::Message>;
}

#[async_trait]
pub trait KnowledgeService: Send + Sync {
    /// Lists all articles, newest first.
    async fn list_articles(&self) -> ServiceResult<Vec<entities::Article>>;

    async fn create_article(&self, article: NewArticle) -> ServiceResult<entities::Article>;

    /// Inserts the built-in articles when the knowledge base is empty.
    ///
    /// Returns the number of articles inserted.
    async fn seed_if_empty(&self) -> ServiceResult<usize>;
}

#[async_trait]
pub trait AgentService: Send + Sync {
    async fn list_agents(&self) -> ServiceResult<Vec<entities::Agent>>;

    /// Returns `Conflict` if another agent already uses this email.
    async fn create_agent(
        &self,
        name: Option<String>,
        email: Option<String>,
    ) -> ServiceResult<entities::Agent>;
}
