//! Async driver for a single lookup session.
//!
//! [`Session`] owns the search text and the current [`SessionState`], issues
//! requests through a [`StatsClient`], and turns every outcome into an event
//! for [`transition`]. Methods take `&mut self`, so at most one request is in
//! flight per session.

use std::future::{self, Future};
use std::time::Duration;

use crate::{
    cli::types::{classify, SearchQuery},
    error::{KardsError, Result},
    kards::http::StatsClient,
};

use super::state::{
    transition, QueryOutcome, RequestId, SessionEvent, SessionState, SessionView, UpdateOutcome,
};


pub struct Session<C> {
    client: C,
    timeout: Duration,
    search_text: String,
    state: SessionState,
    next_request: u64,
}

/// Await `request` under a deadline. `None` means `cancel` fired first.
async fn run_request<T, R, F>(request: R, timeout: Duration, cancel: F) -> Option<Result<T>>
where
    R: Future<Output = Result<T>>,
    F: Future<Output = ()>,
{
    tokio::select! {
        biased;
        res = tokio::time::timeout(timeout, request) => Some(match res {
            Ok(result) => result,
            Err(_) => Err(KardsError::Timeout {
                secs: timeout.as_secs(),
            }),
        }),
        _ = cancel => None,
    }
}

impl<C: StatsClient> Session<C> {
    pub fn new(client: C, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            search_text: String::new(),
            state: SessionState::Idle,
            next_request: 0,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn view(&self) -> SessionView {
        SessionView::new(&self.search_text, &self.state)
    }

    fn next_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    fn apply(&mut self, event: SessionEvent) {
        let previous = std::mem::take(&mut self.state);
        self.state = transition(previous, event);
        tracing::trace!(state = ?self.state, "session state updated");
    }

    /// Set the search text and submit it.
    pub async fn search(&mut self, text: impl Into<String>) -> &SessionState {
        self.set_search_text(text);
        self.submit().await
    }

    /// Submit the current search text.
    pub async fn submit(&mut self) -> &SessionState {
        self.submit_until(future::pending()).await
    }

    /// Submit the current search text, abandoning the request if `cancel` completes first.
    pub async fn submit_until<F>(&mut self, cancel: F) -> &SessionState
    where
        F: Future<Output = ()>,
    {
        let query = classify(&self.search_text);
        let request = self.next_request_id();
        self.apply(SessionEvent::Submitted {
            request,
            query: query.clone(),
        });

        let result = match &query {
            SearchQuery::Invalid => {
                tracing::warn!(input = %self.search_text, "rejected malformed search");
                return &self.state;
            }
            SearchQuery::NameTag { name, tag } => {
                tracing::info!(%query, "looking up player by name");
                run_request(self.client.fetch_by_name(name, *tag), self.timeout, cancel).await
            }
            SearchQuery::NumericId(id) => {
                tracing::info!(%id, "looking up player by id");
                run_request(self.client.fetch_by_id(id), self.timeout, cancel).await
            }
        };

        let event = match result {
            Some(result) => SessionEvent::QueryResolved {
                request,
                outcome: QueryOutcome::from(result),
            },
            None => {
                tracing::info!(%query, "search cancelled");
                SessionEvent::Cancelled { request }
            }
        };
        self.apply(event);
        &self.state
    }

    /// Ask the server to recompute the loaded player's stats.
    pub async fn request_update(&mut self) -> Result<&SessionState> {
        self.request_update_until(future::pending()).await
    }

    /// Like [`Session::request_update`], abandoning the request if `cancel` completes first.
    ///
    /// Fails without touching the state when no player is loaded or a request is pending.
    pub async fn request_update_until<F>(&mut self, cancel: F) -> Result<&SessionState>
    where
        F: Future<Output = ()>,
    {
        let id = match &self.state {
            SessionState::Ready { data, .. } => data.player.id.clone(),
            SessionState::Loading(_) => return Err(KardsError::RequestInFlight),
            SessionState::Idle | SessionState::Errored(_) => {
                return Err(KardsError::NoPlayerLoaded)
            }
        };

        let request = self.next_request_id();
        self.apply(SessionEvent::UpdateIssued { request });
        tracing::info!(%id, "requesting stats update");

        let event = match run_request(self.client.request_update(&id), self.timeout, cancel).await
        {
            Some(result) => SessionEvent::UpdateResolved {
                request,
                outcome: UpdateOutcome::from(result),
            },
            None => {
                tracing::info!(%id, "update cancelled");
                SessionEvent::Cancelled { request }
            }
        };
        self.apply(event);
        Ok(&self.state)
    }

    /// Abandon whatever request is pending, e.g. after its future was dropped.
    pub fn cancel_pending(&mut self) -> &SessionState {
        if let Some(request) = self.state.pending().map(|p| p.id) {
            self.apply(SessionEvent::Cancelled { request });
        }
        &self.state
    }
}
