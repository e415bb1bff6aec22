//! Tavola Booking Service
//!
//! HTTP service behind the restaurant reservation form.
//!
//! # Module structure
//!
//! ```text
//! tavola-server/src/
//! ├── core/       # config, state, server bootstrap
//! ├── api/        # HTTP routes and handlers
//! ├── booking.rs  # slot rules and table allocation
//! ├── db/         # SQLite storage (sqlx)
//! └── utils/      # logger, time helpers
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
