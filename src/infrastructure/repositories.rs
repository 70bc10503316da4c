//! DB Repository abstractions

use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::entities::{Agent, Article, Message, Ticket};
use crate::infrastructure::traits::{
    AgentRepository, KnowledgeRepository, MessageRepository, TicketRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use di::{Ref, injectable};
use uuid::Uuid;

#[injectable(TicketRepository)]
pub struct DbTicketRepository {
    connection: Ref<DatabaseConnection>,
}

#[async_trait]
impl TicketRepository for DbTicketRepository {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tickets ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&**self.connection)
            .await
    }

    async fn create_ticket(&self, ticket: Ticket) -> Result<Ticket, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO tickets (id, title, description, priority, status, requester_email, agent_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(ticket.id)
        .bind(ticket.title)
        .bind(ticket.description)
        .bind(ticket.priority)
        .bind(ticket.status)
        .bind(ticket.requester_email)
        .bind(ticket.agent_id)
        .bind(ticket.created_at)
        .bind(ticket.updated_at)
        .fetch_one(&**self.connection)
        .await
    }

    async fn find_ticket(&self, ticket_id: Uuid) -> Result<Option<Ticket>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tickets WHERE id = ?")
            .bind(ticket_id)
            .fetch_optional(&**self.connection)
            .await
    }

    async fn update_ticket(
        &self,
        ticket_id: Uuid,
        status: Option<String>,
        agent_id: Option<Uuid>,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE tickets SET status = ?, agent_id = ?, updated_at = ? WHERE id = ?")
                .bind(status)
                .bind(agent_id)
                .bind(updated_at)
                .bind(ticket_id)
                .execute(&**self.connection)
                .await?;

        Ok(result.rows_affected())
    }

    async fn delete_ticket(&self, ticket_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = ?")
            .bind(ticket_id)
            .execute(&**self.connection)
            .await?;

        Ok(result.rows_affected())
    }
}

#[injectable(MessageRepository)]
pub struct DbMessageRepository {
    connection: Ref<DatabaseConnection>,
}

#[async_trait]
impl MessageRepository for DbMessageRepository {
    async fn list_ticket_messages(&self, ticket_id: Uuid) -> Result<Vec<Message>, sqlx::Error> {
        sqlx::query_as(
            "SELECT * FROM messages WHERE ticket_id = ? ORDER BY created_at ASC, rowid ASC",
        )
        .bind(ticket_id)
        .fetch_all(&**self.connection)
        .await
    }

    async fn create_message(&self, message: Message) -> Result<Message, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO messages (id, ticket_id, author_role, body, created_at) VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(message.id)
        .bind(message.ticket_id)
        .bind(message.author_role)
        .bind(message.body)
        .bind(message.created_at)
        .fetch_one(&**self.connection)
        .await
    }
}

#[injectable(AgentRepository)]
pub struct DbAgentRepository {
    connection: Ref<DatabaseConnection>,
}

#[async_trait]
impl AgentRepository for DbAgentRepository {
    async fn list_agents(&self) -> Result<Vec<Agent>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM agents")
            .fetch_all(&**self.connection)
            .await
    }

    async fn create_agent(&self, agent: Agent) -> Result<Agent, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO agents (id, name, email, active_tickets) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(agent.id)
        .bind(agent.name)
        .bind(agent.email)
        .bind(agent.active_tickets)
        .fetch_one(&**self.connection)
        .await
    }
}

#[injectable(KnowledgeRepository)]
pub struct DbKnowledgeRepository {
    connection: Ref<DatabaseConnection>,
}

const INSERT_ARTICLE: &str = "INSERT INTO articles (id, title, body, category, created_at) VALUES (?, ?, ?, ?, ?) RETURNING *";

#[async_trait]
impl KnowledgeRepository for DbKnowledgeRepository {
    async fn list_articles(&self) -> Result<Vec<Article>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM articles ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&**self.connection)
            .await
    }

    async fn count_articles(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles")
            .fetch_one(&**self.connection)
            .await?;

        Ok(count)
    }

    async fn create_article(&self, article: Article) -> Result<Article, sqlx::Error> {
        sqlx::query_as(INSERT_ARTICLE)
            .bind(article.id)
            .bind(article.title)
            .bind(article.body)
            .bind(article.category)
            .bind(article.created_at)
            .fetch_one(&**self.connection)
            .await
    }

    async fn create_articles(&self, articles: Vec<Article>) -> Result<(), sqlx::Error> {
        let mut tx = self.connection.begin().await?;

        for article in articles {
            sqlx::query(INSERT_ARTICLE)
                .bind(article.id)
                .bind(article.title)
                .bind(article.body)
                .bind(article.category)
                .bind(article.created_at)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }
}
