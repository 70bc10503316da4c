//! Agent directory endpoints

use crate::api::{ApiJson, ApiResult};
use crate::core::traits::AgentService;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/", get(list_agents).post(create_agent))
}

async fn list_agents(
    Inject(agent_service): Inject<dyn AgentService>,
) -> ApiResult<Json<Vec<schemas::Agent>>> {
    let agents = agent_service.list_agents().await?;

    Ok(Json(agents.into_iter().map(schemas::Agent::from).collect()))
}

async fn create_agent(
    Inject(agent_service): Inject<dyn AgentService>,
    ApiJson(agent): ApiJson<schemas::CreateAgent>,
) -> ApiResult<(StatusCode, Json<schemas::Agent>)> {
    let agent = agent_service.create_agent(agent.name, agent.email).await?;

    Ok((StatusCode::CREATED, Json(agent.into())))
}

pub mod schemas {
    use crate::infrastructure::entities;
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Deserialize, Debug)]
    pub struct CreateAgent {
        #[serde(rename = "nome")]
        pub name: Option<String>,
        pub email: Option<String>,
    }

    #[derive(Serialize, Debug)]
    pub struct Agent {
        pub id: Uuid,
        #[serde(rename = "nome")]
        pub name: String,
        pub email: String,
        #[serde(rename = "tickets_ativos")]
        pub active_tickets: i64,
    }

    impl From<entities::Agent> for Agent {
        fn from(agent: entities::Agent) -> Self {
            Agent {
                id: agent.id,
                name: agent.name,
                email: agent.email,
                active_tickets: agent.active_tickets,
            }
        }
    }
}
