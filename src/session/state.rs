//! Session state and its transition function.
//!
//! The session is always in exactly one [`SessionState`]. All changes go
//! through [`transition`], which is pure: the async driver in
//! [`super::orchestrator`] only decides *which* event to feed it.

use serde::Serialize;

use crate::{
    cli::types::{PlayerId, SearchQuery},
    error::{KardsError, RequestFailure},
    kards::{
        normalize::{PlayerStats, SeasonEntry},
        types::{StatsPayload, UpdatePayload},
    },
};


/// Identifies one issued request so late answers to superseded requests can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum RequestKind {
    Search(SearchQuery),
    Update(PlayerId),
}

/// The single outstanding request.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub kind: RequestKind,
    /// Data shown while an update is pending; `None` for searches.
    pub retained: Option<PlayerStats>,
    pub queued: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Nothing searched yet, or a request was cancelled before any data loaded.
    #[default]
    Idle,
    Loading(PendingRequest),
    /// A player is loaded. `notice` holds a failed update that kept the data.
    Ready {
        data: PlayerStats,
        queued: bool,
        notice: Option<RequestFailure>,
    },
    Errored(RequestFailure),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading(_))
    }

    /// Loaded data, including data retained while an update is pending.
    pub fn data(&self) -> Option<&PlayerStats> {
        match self {
            SessionState::Ready { data, .. } => Some(data),
            SessionState::Loading(pending) => pending.retained.as_ref(),
            SessionState::Idle | SessionState::Errored(_) => None,
        }
    }

    pub fn queued(&self) -> bool {
        match self {
            SessionState::Ready { queued, .. } => *queued,
            SessionState::Loading(pending) => pending.queued,
            SessionState::Idle | SessionState::Errored(_) => false,
        }
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            SessionState::Errored(failure) => Some(failure),
            SessionState::Ready { notice, .. } => notice.as_ref(),
            SessionState::Idle | SessionState::Loading(_) => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingRequest> {
        match self {
            SessionState::Loading(pending) => Some(pending),
            _ => None,
        }
    }
}

/// How a stats query ended.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Loaded(PlayerStats),
    Rejected(String),
    Unrecognized,
    TransportFailed,
}

impl From<StatsPayload> for QueryOutcome {
    fn from(payload: StatsPayload) -> Self {
        match payload {
            StatsPayload::Stats(result) => {
                QueryOutcome::Loaded(PlayerStats::new(result.player, &result.stats))
            }
            StatsPayload::Error(e) => QueryOutcome::Rejected(e.error),
            StatsPayload::Unrecognized => QueryOutcome::Unrecognized,
        }
    }
}

impl From<Result<StatsPayload, KardsError>> for QueryOutcome {
    fn from(result: Result<StatsPayload, KardsError>) -> Self {
        match result {
            Ok(payload) => payload.into(),
            Err(e) => {
                tracing::warn!(error = %e, "stats query failed");
                QueryOutcome::TransportFailed
            }
        }
    }
}

/// How an update request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Queued(bool),
    Rejected(String),
    Unrecognized,
    TransportFailed,
}

impl From<UpdatePayload> for UpdateOutcome {
    fn from(payload: UpdatePayload) -> Self {
        match payload {
            UpdatePayload::QueueResult(q) => UpdateOutcome::Queued(q.queued),
            UpdatePayload::Error(e) => UpdateOutcome::Rejected(e.error),
            UpdatePayload::Unrecognized => UpdateOutcome::Unrecognized,
        }
    }
}

impl From<Result<UpdatePayload, KardsError>> for UpdateOutcome {
    fn from(result: Result<UpdatePayload, KardsError>) -> Self {
        match result {
            Ok(payload) => payload.into(),
            Err(e) => {
                tracing::warn!(error = %e, "update request failed");
                UpdateOutcome::TransportFailed
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Submitted {
        request: RequestId,
        query: SearchQuery,
    },
    UpdateIssued {
        request: RequestId,
    },
    QueryResolved {
        request: RequestId,
        outcome: QueryOutcome,
    },
    UpdateResolved {
        request: RequestId,
        outcome: UpdateOutcome,
    },
    Cancelled {
        request: RequestId,
    },
}

fn failure_from_query(outcome: QueryOutcome) -> Result<PlayerStats, RequestFailure> {
    match outcome {
        QueryOutcome::Loaded(data) => Ok(data),
        QueryOutcome::Rejected(message) => Err(RequestFailure::Domain(message)),
        QueryOutcome::Unrecognized => Err(RequestFailure::Protocol),
        QueryOutcome::TransportFailed => Err(RequestFailure::Transport),
    }
}

/// Compute the next state. Events that do not apply to `state` leave it unchanged.
///
/// A submission always wins over whatever is pending; an update is only
/// accepted while a player is loaded and nothing is pending.
pub fn transition(state: SessionState, event: SessionEvent) -> SessionState {
    match (state, event) {
        (_, SessionEvent::Submitted { request, query }) => match query {
            SearchQuery::Invalid => SessionState::Errored(RequestFailure::Validation),
            query => SessionState::Loading(PendingRequest {
                id: request,
                kind: RequestKind::Search(query),
                retained: None,
                queued: false,
            }),
        },

        (SessionState::Ready { data, queued, .. }, SessionEvent::UpdateIssued { request }) => {
            let id = data.player.id.clone();
            SessionState::Loading(PendingRequest {
                id: request,
                kind: RequestKind::Update(id),
                retained: Some(data),
                queued,
            })
        }

        (SessionState::Loading(pending), SessionEvent::QueryResolved { request, outcome })
            if pending.id == request && matches!(pending.kind, RequestKind::Search(_)) =>
        {
            match failure_from_query(outcome) {
                Ok(data) => SessionState::Ready {
                    data,
                    queued: false,
                    notice: None,
                },
                Err(failure) => SessionState::Errored(failure),
            }
        }

        (SessionState::Loading(pending), SessionEvent::UpdateResolved { request, outcome })
            if pending.id == request && matches!(pending.kind, RequestKind::Update(_)) =>
        {
            let PendingRequest {
                retained, queued, ..
            } = pending;
            let Some(data) = retained else {
                return SessionState::Errored(RequestFailure::Protocol);
            };
            match outcome {
                UpdateOutcome::Queued(queued) => SessionState::Ready {
                    data,
                    queued,
                    notice: None,
                },
                UpdateOutcome::Rejected(message) => {
                    SessionState::Errored(RequestFailure::Domain(message))
                }
                UpdateOutcome::Unrecognized => SessionState::Ready {
                    data,
                    queued,
                    notice: Some(RequestFailure::Protocol),
                },
                UpdateOutcome::TransportFailed => SessionState::Ready {
                    data,
                    queued,
                    notice: Some(RequestFailure::Transport),
                },
            }
        }

        (SessionState::Loading(pending), SessionEvent::Cancelled { request })
            if pending.id == request =>
        {
            match pending.retained {
                Some(data) => SessionState::Ready {
                    data,
                    queued: pending.queued,
                    notice: None,
                },
                None => SessionState::Idle,
            }
        }

        (state, event) => {
            tracing::debug!(?event, "ignoring event that does not apply to the current state");
            state
        }
    }
}

/// Flat snapshot handed to presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub search_text: String,
    pub loading: bool,
    pub queued: bool,
    pub has_data: bool,
    pub error: String,
    pub data: Option<PlayerStats>,
    pub seasons: Vec<SeasonEntry>,
}

impl SessionView {
    pub fn new(search_text: &str, state: &SessionState) -> Self {
        let data = state.data().cloned();
        Self {
            search_text: search_text.to_string(),
            loading: state.is_loading(),
            queued: state.queued(),
            has_data: data.is_some(),
            error: state
                .failure()
                .map(|f| f.message().to_string())
                .unwrap_or_default(),
            seasons: data.as_ref().map(PlayerStats::seasons).unwrap_or_default(),
            data,
        }
    }
}
