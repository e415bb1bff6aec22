//! Server configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | HTTP_PORT | 8080 | HTTP API port |
//! | DATABASE_PATH | tavola.db | SQLite database file |
//! | TOTAL_TABLES | 30 | Tables available per time slot |
//! | ENVIRONMENT | development | development \| staging \| production |

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Number of tables available per time slot
    pub total_tables: u32,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults where unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "tavola.db".into()),
            total_tables: std::env::var("TOTAL_TABLES")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(30),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override database path and port, keeping the rest from the
    /// environment. Used by tests.
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
