use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use league_core::settings::ScoringSettings;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Unknown log format '{other}' (expected 'text' or 'json')"),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
    pub scoring: ScoringSettings,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("LEAGUE_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid LEAGUE_LISTEN_ADDR")?;
        let cors_allow = std::env::var("LEAGUE_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("LEAGUE_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .context("Invalid LEAGUE_REQUEST_TIMEOUT_MS")?;
        let log_format: LogFormat = std::env::var("LEAGUE_LOG_FORMAT")
            .unwrap_or_else(|_| "text".into())
            .parse()
            .context("Invalid LEAGUE_LOG_FORMAT")?;
        let default_tier =
            std::env::var("LEAGUE_DEFAULT_TIER").unwrap_or_else(|_| "moderate".into());
        let diversification_enabled =
            std::env::var("LEAGUE_DIVERSIFICATION_ENABLED").unwrap_or_else(|_| "true".into());
        let scoring =
            ScoringSettings::from_config_values(&default_tier, &diversification_enabled)?;
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
            scoring,
        })
    }
}
