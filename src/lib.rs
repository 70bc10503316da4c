//! Customer support ticketing API - Library exports for testing
//!
//! (c) Softlandia 2025

pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

use crate::core::services::{MyAgentService, MyKnowledgeService, MyMessageService, MyTicketService};
use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::repositories::{
    DbAgentRepository, DbKnowledgeRepository, DbMessageRepository, DbTicketRepository,
};
use di::{Injectable, ServiceCollection};

/// Registers every repository and service with the DI container.
pub fn services() -> ServiceCollection {
    let mut services = ServiceCollection::new();
    services
        .add(DatabaseConnection::singleton())
        .add(DbTicketRepository::scoped())
        .add(DbMessageRepository::scoped())
        .add(DbAgentRepository::scoped())
        .add(DbKnowledgeRepository::scoped())
        .add(MyTicketService::scoped())
        .add(MyMessageService::scoped())
        .add(MyAgentService::scoped())
        .add(MyKnowledgeService::scoped());
    services
}
