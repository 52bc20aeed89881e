/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. Handlers
 * either take the whole state or pull out one part through the `FromRef`
 * implementations below.
 *
 * # Thread Safety
 *
 * - `SqlitePool` is internally reference counted and shareable
 * - `broadcast::Sender` is cloneable and thread-safe
 * - The presence registry wraps an `Arc<RwLock<..>>`
 * - Config and lexicon are immutable behind `Arc`
 */

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::backend::realtime::{Publisher, PresenceRegistry, RealtimeEventBroadcast};
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::shared::{AfinnLexicon, LexiconScorer, RealtimeEvent};

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the journal store
    pub db: SqlitePool,

    /// Generic real-time event broadcast channel
    pub realtime_broadcast: RealtimeEventBroadcast,

    /// Users with a live real-time connection
    pub presence: PresenceRegistry,

    pub config: Arc<ServerConfig>,

    /// Scorer behind mood classification
    pub lexicon: Arc<dyn LexiconScorer>,
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open the pool described by `database_url` and apply migrations
///
/// An in-memory database lives as long as its one connection, so that pool
/// is pinned to a single connection that never expires.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

impl AppState {
    /// Build state around an already migrated pool
    pub fn new(db: SqlitePool, config: ServerConfig) -> Self {
        let (realtime_broadcast, _) = broadcast::channel::<RealtimeEvent>(config.realtime_capacity);
        Self {
            db,
            realtime_broadcast,
            presence: PresenceRegistry::new(),
            config: Arc::new(config),
            lexicon: Arc::new(AfinnLexicon::new()),
        }
    }

    /// Connect to the configured database and build state
    pub async fn connect(config: ServerConfig) -> Result<Self, StartupError> {
        config.validate()?;
        let db = load_database(&config.database_url).await?;
        Ok(Self::new(db, config))
    }

    /// Swap the sentiment scorer
    pub fn with_lexicon(mut self, lexicon: Arc<dyn LexiconScorer>) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// The broadcast sender as a shareable publisher
    pub fn publisher(&self) -> Arc<dyn Publisher> {
        Arc::new(self.realtime_broadcast.clone())
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for RealtimeEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.realtime_broadcast.clone()
    }
}

impl FromRef<AppState> for PresenceRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.presence.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.config)
    }
}
