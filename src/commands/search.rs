//! One-shot search command implementation

use crate::{
    core::config::ConfigOverrides,
    kards::http::StatsClient,
    session::{Session, SessionView},
    Result,
};

use super::{build_session, render::render_text};

/// Parameters for the search command
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub query: String,
    pub as_json: bool,
    pub update: bool,
}

/// Run one search (and optionally an update) and return the final snapshot.
///
/// Update is skipped when the search did not load a player.
pub async fn run_search<C: StatsClient>(
    session: &mut Session<C>,
    params: &SearchParams,
) -> Result<SessionView> {
    session.search(params.query.as_str()).await;

    if params.update {
        if session.state().data().is_some() {
            session.request_update().await?;
        } else {
            tracing::warn!("skipping update: no player loaded");
        }
    }

    Ok(session.view())
}

/// Handle the search command
pub async fn handle_search(overrides: ConfigOverrides, params: SearchParams) -> Result<()> {
    let mut session = build_session(overrides)?;
    let view = run_search(&mut session, &params).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }

    Ok(())
}
