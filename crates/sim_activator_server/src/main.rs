//! sim_activator_server — standalone REST server for SIM activation.
//!
//! Configuration is read from the environment (and `.env`); see `config.rs`.
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/sim_activator cargo run --bin sim_activator_server
//!
//! curl -X POST http://localhost:8080/activate \
//!   -H "Content-Type: application/json" \
//!   -d '{"iccid": "89010000000001", "customerEmail": "c@x.com"}'
//!
//! curl "http://localhost:8080/query?simCardId=1"
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use sim_activator_actuator::HttpActuatorClient;
use sim_activator_core::{ActivationStore, InMemoryActivationStore};
use sim_activator_postgres::PgActivationStore;
use sim_activator_server::{build_router, config::ServerConfig, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sim_activator_server=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let actuator = HttpActuatorClient::new(&config.actuator_url, config.actuator_timeout)?;
    info!(
        url = actuator.url(),
        timeout_ms = config.actuator_timeout.as_millis() as u64,
        "actuator client ready"
    );

    let store: Arc<dyn ActivationStore> = match &config.database {
        Some(db) => {
            let store = PgActivationStore::connect(db).await?;
            store.initialize_schema().await?;
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL not set, activation records are kept in memory only");
            Arc::new(InMemoryActivationStore::new())
        }
    };

    let app = build_router(AppState::new(Arc::new(actuator), store));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    info!("sim_activator_server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("sim_activator_server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
