//! Pooled SQLite connection

use di::inject;
use di::injectable;
use log::{info, warn};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::ops::{Deref, DerefMut};
use std::sync::RwLock;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:tickets.db?mode=rwc";

/// Pool handed to every `DatabaseConnection` the container creates, when set.
/// `main` installs the migrated pool here; tests install an in-memory one.
static SHARED_POOL: RwLock<Option<SqlitePool>> = RwLock::new(None);

pub struct DatabaseConnection {
    connection: SqlitePool,
}

#[injectable]
impl DatabaseConnection {
    #[inject]
    pub fn create() -> DatabaseConnection {
        if let Some(pool) = Self::shared_pool() {
            return DatabaseConnection { connection: pool };
        }

        dotenvy::dotenv().ok();
        let connection_string =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy(&connection_string)
            .expect("Cannot connect to database");

        DatabaseConnection { connection: pool }
    }
}

impl DatabaseConnection {
    /// Connects to `url` and brings the schema up to date.
    pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;

        sqlx::migrate!().run(&pool).await?;
        info!("database ready at {url}");

        Ok(pool)
    }

    /// Makes the DI container reuse `pool` instead of opening its own.
    pub fn use_pool(pool: SqlitePool) {
        match SHARED_POOL.write() {
            Ok(mut shared) => *shared = Some(pool),
            Err(poisoned) => *poisoned.into_inner() = Some(pool),
        }
    }

    pub fn clear_pool() {
        match SHARED_POOL.write() {
            Ok(mut shared) => *shared = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    fn shared_pool() -> Option<SqlitePool> {
        match SHARED_POOL.read() {
            Ok(shared) => shared.clone(),
            Err(_) => {
                warn!("shared pool lock poisoned, opening a fresh pool");
                None
            }
        }
    }
}

impl Deref for DatabaseConnection {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for DatabaseConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}
