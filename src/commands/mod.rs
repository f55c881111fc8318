//! Command implementations for the KARDS stats CLI

pub mod interactive;
pub mod render;
pub mod search;

use crate::{
    core::config::{ClientConfig, ConfigOverrides},
    kards::http::HttpStatsClient,
    session::Session,
    Result,
};

/// Resolve configuration and build a session backed by the HTTP client.
pub fn build_session(overrides: ConfigOverrides) -> Result<Session<HttpStatsClient>> {
    let config = ClientConfig::resolve(overrides)?;
    tracing::info!(
        environment = %config.environment,
        endpoint = %config.endpoint,
        timeout_secs = config.timeout.as_secs(),
        "using stats service"
    );
    let client = HttpStatsClient::new(&config)?;
    Ok(Session::new(client, config.timeout))
}
