use std::sync::Arc;

use crate::config::{Config, LogFormat};
use league_core::scoring::{ScoringService, ScoringServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub scoring_service: Arc<dyn ScoringServiceTrait + Send + Sync>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    tracing::info!(
        "Scoring with default tier '{}' (diversification {})",
        config.scoring.default_tier,
        if config.scoring.diversification_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    let scoring_service = Arc::new(ScoringService::new(config.scoring));
    Arc::new(AppState { scoring_service })
}
