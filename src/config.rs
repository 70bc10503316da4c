//! Runtime settings read from the environment (and `.env`, when present)

use crate::infrastructure::database::DEFAULT_DATABASE_URL;
use anyhow::Context;
use axum::http::HeaderValue;
use std::env;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// `None` allows any origin.
    pub allowed_origins: Option<Vec<HeaderValue>>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenvy::dotenv().ok();

        let allowed_origins = match env::var("CORS_ALLOW_ORIGIN") {
            Ok(origins) => Some(parse_origins(&origins)?),
            Err(_) => None,
        };

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned()),
            allowed_origins,
        })
    }
}

fn parse_origins(origins: &str) -> anyhow::Result<Vec<HeaderValue>> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin `{origin}`"))
        })
        .collect()
}
