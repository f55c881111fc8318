//! Lookup session: tagged state, pure transitions, and the async driver.

pub mod orchestrator;
pub mod state;

pub use orchestrator::Session;
pub use state::{
    transition, PendingRequest, QueryOutcome, RequestId, RequestKind, SessionEvent, SessionState,
    SessionView, UpdateOutcome,
};
