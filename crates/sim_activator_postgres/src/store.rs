//! PostgreSQL-backed activation store.
//!
//! One append-only table; identifiers come from `BIGSERIAL`, so concurrent
//! inserts never need application-side locking.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sim_activator_core::{
    ActivationAttempt, ActivationStore, AttemptId, NewActivationAttempt, Result,
    SimActivatorError,
};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use tracing::{info, warn};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            connection_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, FromRow)]
struct ActivationRow {
    id: i64,
    iccid: String,
    customer_email: String,
    active: bool,
    created_at: DateTime<Utc>,
}

impl From<ActivationRow> for ActivationAttempt {
    fn from(row: ActivationRow) -> Self {
        Self {
            id: row.id,
            iccid: row.iccid,
            customer_email: row.customer_email,
            active: row.active,
            created_at: row.created_at,
        }
    }
}

pub struct PgActivationStore {
    pool: PgPool,
}

impl PgActivationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool for `config` and wrap it.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        info!(
            "Connecting to database: {}",
            mask_database_url(&config.database_url)
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                e
            })
            .context("Failed to connect to database")?;

        info!("Database connection pool created successfully");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the records table if it does not exist.
    pub async fn initialize_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sim_activation_records (
                id BIGSERIAL PRIMARY KEY,
                iccid TEXT NOT NULL,
                customer_email TEXT NOT NULL,
                active BOOLEAN NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to initialize sim_activation_records schema")?;

        Ok(())
    }
}

#[async_trait]
impl ActivationStore for PgActivationStore {
    async fn create(&self, attempt: NewActivationAttempt) -> Result<ActivationAttempt> {
        let row = sqlx::query_as::<_, ActivationRow>(
            r#"
            INSERT INTO sim_activation_records (iccid, customer_email, active)
            VALUES ($1, $2, $3)
            RETURNING id, iccid, customer_email, active, created_at
            "#,
        )
        .bind(&attempt.iccid)
        .bind(&attempt.customer_email)
        .bind(attempt.active)
        .fetch_one(&self.pool)
        .await
        .map_err(SimActivatorError::persistence)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: AttemptId) -> Result<Option<ActivationAttempt>> {
        let row = sqlx::query_as::<_, ActivationRow>(
            r#"
            SELECT id, iccid, customer_email, active, created_at
            FROM sim_activation_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(SimActivatorError::persistence)?;

        Ok(row.map(Into::into))
    }
}

/// Mask sensitive information in database URL for logging
pub fn mask_database_url(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => "<unparseable database url>".to_string(),
    }
}
