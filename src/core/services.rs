//! Implementations for the services the app needs.
//!

use crate::core::errors::{ServiceError, ServiceResult};
use crate::core::seed::SEED_ARTICLES;
use crate::core::traits::{
    AgentService, KnowledgeService, MessageService, NewArticle, NewTicket, TicketService,
};
use crate::infrastructure::entities::{Agent, Article, Message, Ticket};
use crate::infrastructure::traits::{
    AgentRepository, KnowledgeRepository, MessageRepository, TicketRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use di::{Ref, injectable};
use log::{debug, info};
use uuid::Uuid;

pub const DEFAULT_PRIORITY: &str = "medium";
pub const DEFAULT_STATUS: &str = "open";
pub const DEFAULT_CATEGORY: &str = "General";

/// Presence check only: `None` and `""` are both missing.
fn required(value: Option<String>, field: &str) -> ServiceResult<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ServiceError::Validation(format!("{field} is required"))),
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

#[injectable(TicketService)]
pub struct MyTicketService {
    repo: Ref<dyn TicketRepository>,
}

#[async_trait]
impl TicketService for MyTicketService {
    async fn list_tickets(&self) -> ServiceResult<Vec<Ticket>> {
        Ok(self.repo.list_tickets().await?)
    }

    async fn create_ticket(&self, ticket: NewTicket) -> ServiceResult<Ticket> {
        let title = required(ticket.title, "title")?;
        let description = required(ticket.description, "description")?;
        let requester_email = required(ticket.requester_email, "requester email")?;

        let now = Utc::now();
        let ticket = self
            .repo
            .create_ticket(Ticket {
                id: Uuid::new_v4(),
                title,
                description,
                priority: or_default(ticket.priority, DEFAULT_PRIORITY),
                status: Some(DEFAULT_STATUS.to_owned()),
                requester_email,
                agent_id: None,
                created_at: now,
                updated_at: now,
            })
            .await?;

        debug!("created ticket {}", ticket.id);
        Ok(ticket)
    }

    async fn get_ticket(&self, ticket_id: Uuid) -> ServiceResult<Ticket> {
        self.repo
            .find_ticket(ticket_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("ticket not found".to_owned()))
    }

    async fn update_ticket(
        &self,
        ticket_id: Uuid,
        status: Option<String>,
        agent_id: Option<Uuid>,
    ) -> ServiceResult<()> {
        let affected = self
            .repo
            .update_ticket(ticket_id, status, agent_id, Utc::now())
            .await?;

        if affected == 0 {
            debug!("update matched no ticket with id {ticket_id}");
        }
        Ok(())
    }

    async fn delete_ticket(&self, ticket_id: Uuid) -> ServiceResult<()> {
        let affected = self.repo.delete_ticket(ticket_id).await?;

        if affected == 0 {
            debug!("delete matched no ticket with id {ticket_id}");
        }
        Ok(())
    }
}

#[injectable(MessageService)]
pub struct MyMessageService {
    repo: Ref<dyn MessageRepository>,
}

#[async_trait]
impl MessageService for MyMessageService {
    async fn list_messages(&self, ticket_id: Uuid) -> ServiceResult<Vec<Message>> {
        Ok(self.repo.list_ticket_messages(ticket_id).await?)
    }

    async fn append_message(
        &self,
        ticket_id: Uuid,
        author_role: Option<String>,
        body: Option<String>,
    ) -> ServiceResult<Message> {
        let author_role = required(author_role, "author")?;
        let body = required(body, "message")?;

        let message = self
            .repo
            .create_message(Message {
                id: Uuid::new_v4(),
                ticket_id,
                author_role,
                body,
                created_at: Utc::now(),
            })
            .await?;

        Ok(message)
    }
}

#[injectable(KnowledgeService)]
pub struct MyKnowledgeService {
    repo: Ref<dyn KnowledgeRepository>,
}

#[async_trait]
impl KnowledgeService for MyKnowledgeService {
    async fn list_articles(&self) -> ServiceResult<Vec<Article>> {
        Ok(self.repo.list_articles().await?)
    }

    async fn create_article(&self, article: NewArticle) -> ServiceResult<Article> {
        let title = required(article.title, "title")?;
        let body = required(article.body, "content")?;

        Ok(self
            .repo
            .create_article(Article {
                id: Uuid::new_v4(),
                title,
                body,
                category: or_default(article.category, DEFAULT_CATEGORY),
                created_at: Utc::now(),
            })
            .await?)
    }

    async fn seed_if_empty(&self) -> ServiceResult<usize> {
        if self.repo.count_articles().await? > 0 {
            return Ok(0);
        }

        let articles: Vec<Article> = SEED_ARTICLES
            .iter()
            .map(|seed| Article {
                id: Uuid::new_v4(),
                title: seed.title.to_owned(),
                body: seed.body.to_owned(),
                category: seed.category.to_owned(),
                created_at: Utc::now(),
            })
            .collect();
        let inserted = articles.len();

        self.repo.create_articles(articles).await?;
        info!("seeded knowledge base with {inserted} articles");

        Ok(inserted)
    }
}

#[injectable(AgentService)]
pub struct MyAgentService {
    repo: Ref<dyn AgentRepository>,
}

#[async_trait]
impl AgentService for MyAgentService {
    async fn list_agents(&self) -> ServiceResult<Vec<Agent>> {
        Ok(self.repo.list_agents().await?)
    }

    async fn create_agent(
        &self,
        name: Option<String>,
        email: Option<String>,
    ) -> ServiceResult<Agent> {
        let name = required(name, "name")?;
        let email = required(email, "email")?;

        Ok(self
            .repo
            .create_agent(Agent {
                id: Uuid::new_v4(),
                name,
                email,
                active_tickets: 0,
            })
            .await?)
    }
}
