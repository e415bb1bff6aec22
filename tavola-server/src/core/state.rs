//! Server state

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use shared::error::AppResult;

/// Server state shared by all request handlers
///
/// Cheap to clone: the pool is reference-counted internally.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Initialize the server state: open the database and run migrations
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }
}
