use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// Server state — holds shared references to all services
///
/// Cloning is cheap: the pool and JWT service are reference-counted
/// internally, so every handler receives a shallow copy.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub db: SqlitePool,
    /// JWT authentication service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, db: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Initialize server state
    ///
    /// 1. Ensure the work directory structure exists
    /// 2. Open the database (work_dir/database/bookstore.db) and run migrations
    /// 3. Build the JWT service from config
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("bookstore.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self::new(config.clone(), db_service.pool, jwt_service)
    }

    /// Get a database pool handle
    pub fn get_db(&self) -> SqlitePool {
        self.db.clone()
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Directory for uploaded media files
    pub fn uploads_dir(&self) -> PathBuf {
        self.config.uploads_dir()
    }
}
