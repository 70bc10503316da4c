//! Knowledge base endpoints

use crate::api::{ApiJson, ApiResult};
use crate::core::traits::KnowledgeService;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/", get(list_articles).post(create_article))
}

async fn list_articles(
    Inject(knowledge_service): Inject<dyn KnowledgeService>,
) -> ApiResult<Json<Vec<schemas::Article>>> {
    let articles = knowledge_service.list_articles().await?;

    Ok(Json(
        articles.into_iter().map(schemas::Article::from).collect(),
    ))
}

async fn create_article(
    Inject(knowledge_service): Inject<dyn KnowledgeService>,
    ApiJson(article): ApiJson<schemas::CreateArticle>,
) -> ApiResult<(StatusCode, Json<schemas::Article>)> {
    let article = knowledge_service.create_article(article.into()).await?;

    Ok((StatusCode::CREATED, Json(article.into())))
}

pub mod schemas {
    use crate::core::traits::NewArticle;
    use crate::infrastructure::entities;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Deserialize, Debug)]
    pub struct CreateArticle {
        #[serde(rename = "titulo")]
        pub title: Option<String>,
        #[serde(rename = "conteudo")]
        pub body: Option<String>,
        #[serde(rename = "categoria")]
        pub category: Option<String>,
    }

    impl From<CreateArticle> for NewArticle {
        fn from(article: CreateArticle) -> Self {
            NewArticle {
                title: article.title,
                body: article.body,
                category: article.category,
            }
        }
    }

    #[derive(Serialize, Debug)]
    pub struct Article {
        pub id: Uuid,
        #[serde(rename = "titulo")]
        pub title: String,
        #[serde(rename = "conteudo")]
        pub body: String,
        #[serde(rename = "categoria")]
        pub category: String,
        #[serde(rename = "criado_em")]
        pub created_at: DateTime<Utc>,
    }

    impl From<entities::Article> for Article {
        fn from(article: entities::Article) -> Self {
            Article {
                id: article.id,
                title: article.title,
                body: article.body,
                category: article.category,
                created_at: article.created_at,
            }
        }
    }
}
