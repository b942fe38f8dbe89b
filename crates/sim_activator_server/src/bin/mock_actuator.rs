//! Local stand-in for the activation actuator on :8444.
//!
//! ```bash
//! MOCK_ACTUATOR_MODE=fail cargo run --bin mock_actuator
//! ```

use anyhow::{Context, Result};
use sim_activator_server::{config::MockActuatorConfig, mock_actuator::mock_actuator_router};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = MockActuatorConfig::from_env()?;
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    info!(mode = ?config.mode, "mock actuator listening on {}", config.bind_addr);

    axum::serve(listener, mock_actuator_router(config.mode))
        .await
        .context("mock actuator error")?;
    Ok(())
}
