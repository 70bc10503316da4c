//! Infrastructure traits, used for DI on higher levels

use crate::infrastructure::entities;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Newest first.
    async fn list_tickets(&self) -> Result<Vec<entities::Ticket>, sqlx::Error>;

    async fn create_ticket(
        &self,
        ticket: entities::Ticket,
    ) -> Result<entities::Ticket, sqlx::Error>;

    async fn find_ticket(&self, ticket_id: Uuid) -> Result<Option<entities::Ticket>, sqlx::Error>;

    /// Overwrites status and agent. Returns the number of affected rows.
    async fn update_ticket(
        &self,
        ticket_id: Uuid,
        status: Option<String>,
        agent_id: Option<Uuid>,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error>;

    /// Returns the number of affected rows. Messages are left untouched.
    async fn delete_ticket(&self, ticket_id: Uuid) -> Result<u64, sqlx::Error>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Oldest first.
    async fn list_ticket_messages(
        &self,
        ticket_id: Uuid,
    ) -> Result<Vec<entities::Message>, sqlx::Error>;

    async fn create_message(
        &self,
        message: entities::Message,
    ) -> Result<entities::Message, sqlx::Error>;
}

#[async_trait]
pub trait AgentRepository: Send + Sync {
    async fn list_agents(&self) -> Result<Vec<entities::Agent>, sqlx::Error>;

    async fn create_agent(&self, agent: entities::Agent) -> Result<entities::Agent, sqlx::Error>;
}

#[async_trait]
pub trait KnowledgeRepository: Send + Sync {
    /// Newest first.
    async fn list_articles(&self) -> Result<Vec<entities::Article>, sqlx::Error>;

    async fn count_articles(&self) -> Result<i64, sqlx::Error>;

    async fn create_article(
        &self,
        article: entities::Article,
    ) -> Result<entities::Article, sqlx::Error>;

    /// Inserts all articles in a single transaction.
    async fn create_articles(&self, articles: Vec<entities::Article>) -> Result<(), sqlx::Error>;
}
