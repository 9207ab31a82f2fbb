//! Bookstore Server — online bookstore catalog/commerce backend
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): RESTful routes, one module per resource
//! - **Database** (`db`): SQLite storage via sqlx, repositories per entity
//! - **Catalog rules** (`catalog`): cross-entity invariants and derived
//!   values — inventory guard, taxonomy deletion, bundle pricing
//! - **Auth** (`auth`): JWT + Argon2 authentication, role permissions
//!
//! # Module layout
//!
//! ```text
//! server/src/
//! ├── core/          # Config, state, server lifecycle
//! ├── auth/          # JWT, credential hashing, permissions
//! ├── catalog/       # Business rule modules
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Pool, migrations, models, repositories
//! └── utils/         # Logging, payload validation
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up process environment: dotenv, work directory, logging
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let logs_dir = config.logs_dir();
    init_logger_with_file(Some(&config.log_level), logs_dir.to_str());

    Ok(config)
}
