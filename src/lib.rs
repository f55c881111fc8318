//! KARDS Player Stats Library
//!
//! Look up KARDS player statistics from the public stats service by
//! `Name#1234` or 6-digit player id, normalize them into a keyed map, and
//! request server-side recomputation of stale stats.
//!
//! ## Features
//!
//! - **Search Classification**: Reject malformed searches before any request is made
//! - **Stat Normalization**: Fold typed stat records into one map, derive season wins
//! - **Session State Machine**: Tagged state plus a pure transition function
//! - **Pluggable Transport**: Sessions depend on the [`StatsClient`] trait only
//! - **Deadlines and Cancellation**: No request can leave a session loading forever
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kards_stats::{core::config::ClientConfig, HttpStatsClient, Session};
//!
//! # async fn example() -> kards_stats::Result<()> {
//! let config = ClientConfig::for_endpoint("http://localhost:4848/");
//! let mut session = Session::new(HttpStatsClient::new(&config)?, config.timeout);
//!
//! session.search("FuTBoL#3801").await;
//! if session.state().data().is_some() {
//!     session.request_update().await?;
//! }
//! println!("queued: {}", session.view().queued);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export KARDS_STATS_ENV=production          # or local
//! export KARDS_STATS_ENDPOINT=http://...     # overrides the environment's URL
//! export KARDS_STATS_TIMEOUT_SECS=30
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod kards;
pub mod session;

// Re-export commonly used types
pub use cli::types::{classify, PlayerId, PlayerTag, SearchQuery};
pub use error::{KardsError, RequestFailure, Result};
pub use kards::http::{HttpStatsClient, StatsClient};
pub use kards::normalize::{derive_seasons, normalize, PlayerStats, SeasonEntry, StatValue, StatsMap};
pub use session::{Session, SessionState, SessionView};
