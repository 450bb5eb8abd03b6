//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::PostRepository;
use postboard_infra::{DatabaseConfig, InMemoryPostRepository};

/// Shared application state.
///
/// The store handle is built once at startup and cloned into every worker.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Wrap an already constructed store.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the application state with the configured store.
    ///
    /// Falls back to the in-memory store when no database is configured
    /// or the database cannot be reached.
    pub async fn new(db_config: Option<&DatabaseConfig>, auto_migrate: bool) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match connect_postgres(config, auto_migrate).await {
                Ok(repo) => Self::with_repository(repo),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = (db_config, auto_migrate);
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(storage = state.posts.backend(), "Application state initialized");
        state
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(
    config: &DatabaseConfig,
    auto_migrate: bool,
) -> Result<Arc<dyn PostRepository>, postboard_infra::database::DbError> {
    use migration::{Migrator, MigratorTrait};
    use postboard_infra::PostgresPostRepository;

    let conn = postboard_infra::connect(config).await?;
    if auto_migrate {
        Migrator::up(&conn, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(PostgresPostRepository::new(conn)))
}
