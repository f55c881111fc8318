//! KARDS public stats service: wire types, GraphQL transport, normalization.

pub mod http;
pub mod normalize;
pub mod types;
