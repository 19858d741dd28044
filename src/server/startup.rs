use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;
use tower_sessions::{session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError, router::build_app, state::AppState};

/// How often expired session rows are purged.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready");

    Ok(db)
}

/// Builds the session layer on top of the application's database pool.
///
/// The session table is created if missing and a background task is spawned that
/// purges expired sessions. Cookies are marked secure in production and sessions
/// expire after `session_ttl_days` of inactivity.
///
/// # Returns
/// - `Ok((layer, task))` - Session layer and the handle of the deletion task
/// - `Err(AppError::SqlxErr)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<(SessionManagerLayer<SqliteStore>, JoinHandle<()>), AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let deletion_store = session_store.clone();
    let deletion_task = tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(SESSION_CLEANUP_INTERVAL)
            .await
        {
            tracing::error!("Expired session deletion stopped: {}", e);
        }
    });

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.is_production())
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_ttl_days,
        )));

    Ok((session_layer, deletion_task))
}

/// The assembled application and the resources it owns.
pub struct Application {
    pub router: Router,
    pub db: DatabaseConnection,
    tasks: Vec<JoinHandle<()>>,
}

impl Application {
    /// Initializes storage, sessions and the router in order.
    ///
    /// # Returns
    /// - `Ok(Application)` - Ready to serve
    /// - `Err(AppError)` - Database, session store or configuration failure
    pub async fn build(config: &Config) -> Result<Self, AppError> {
        let db = connect_to_database(config).await?;
        let (session_layer, deletion_task) = connect_to_session(&db, config).await?;

        let state = AppState::new(db.clone(), config.allow_seeding());
        let (router, limiter_cleanup) = build_app(state, session_layer, config)?;

        let mut tasks = vec![deletion_task];
        tasks.extend(limiter_cleanup);

        Ok(Self { router, db, tasks })
    }

    /// Stops background tasks and closes the database pool.
    pub async fn shutdown(self) -> Result<(), AppError> {
        for task in &self.tasks {
            task.abort();
        }

        self.db.close().await?;

        tracing::info!("Shutdown complete");

        Ok(())
    }
}
