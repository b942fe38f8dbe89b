//! Environment configuration.
//!
//!   SIM_ACTIVATOR_BIND_ADDR  — listen address (default: 0.0.0.0:8080)
//!   ACTUATOR_URL             — actuator endpoint (default: http://localhost:8444/actuate)
//!   ACTUATOR_TIMEOUT_MS      — outbound call timeout (default: 10000)
//!   DATABASE_URL             — Postgres connection string; unset means in-memory store
//!   DATABASE_POOL_SIZE       — pool size (default: 10)
//!   MOCK_ACTUATOR_BIND_ADDR  — mock actuator listen address (default: 127.0.0.1:8444)
//!   MOCK_ACTUATOR_MODE       — success | fail | error | garbage (default: success)

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use sim_activator_actuator::{DEFAULT_ACTUATOR_URL, DEFAULT_TIMEOUT};
use sim_activator_postgres::DatabaseConfig;
use tracing::warn;
use url::Url;

use crate::mock_actuator::MockActuatorMode;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MOCK_BIND_ADDR: &str = "127.0.0.1:8444";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub actuator_url: String,
    pub actuator_timeout: Duration,
    pub database: Option<DatabaseConfig>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = parse_addr(&lookup, "SIM_ACTIVATOR_BIND_ADDR", DEFAULT_BIND_ADDR)?;

        let actuator_url = parse_actuator_url(&lookup)?;

        let actuator_timeout = parse_or_default::<u64, _>(&lookup, "ACTUATOR_TIMEOUT_MS")
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let mut config = DatabaseConfig::new(url);
                if let Some(size) = parse_or_default::<u32, _>(&lookup, "DATABASE_POOL_SIZE") {
                    config.max_connections = size;
                }
                config
            });

        Ok(Self {
            bind_addr,
            actuator_url,
            actuator_timeout,
            database,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MockActuatorConfig {
    pub bind_addr: SocketAddr,
    pub mode: MockActuatorMode,
}

impl MockActuatorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = parse_addr(&lookup, "MOCK_ACTUATOR_BIND_ADDR", DEFAULT_MOCK_BIND_ADDR)?;
        let mode = match lookup("MOCK_ACTUATOR_MODE") {
            Some(raw) => raw
                .parse::<MockActuatorMode>()
                .map_err(|e| anyhow!("invalid MOCK_ACTUATOR_MODE: {e}"))?,
            None => MockActuatorMode::Success,
        };
        Ok(Self { bind_addr, mode })
    }
}

fn parse_addr<L>(lookup: &L, key: &str, default: &str) -> Result<SocketAddr>
where
    L: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.parse::<SocketAddr>()
        .with_context(|| format!("invalid {key} {raw:?}"))
}

/// A bad actuator URL would otherwise surface per request as Unreachable.
fn parse_actuator_url<L>(lookup: &L) -> Result<String>
where
    L: Fn(&str) -> Option<String>,
{
    let raw = lookup("ACTUATOR_URL").unwrap_or_else(|| DEFAULT_ACTUATOR_URL.to_string());
    let raw = raw.trim().to_string();
    let parsed = Url::parse(&raw).with_context(|| format!("invalid ACTUATOR_URL {raw:?}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw),
        other => Err(anyhow!(
            "invalid ACTUATOR_URL {raw:?}: unsupported scheme {other:?}"
        )),
    }
}

/// `None` when unset; unparsable values are warned about and treated as unset.
fn parse_or_default<T, L>(lookup: &L, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    L: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring unparsable {}={:?}, using default", key, raw);
            None
        }
    }
}
