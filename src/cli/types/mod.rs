//! Type-safe wrappers for KARDS player identities and searches.

pub mod ids;
pub mod search;

pub use ids::{PlayerId, PlayerTag};
pub use search::{classify, SearchQuery};
