//! Core utilities for the KARDS stats client
//!
//! This module consolidates the ambient pieces used across the application:
//! - `config`: endpoint selection and request deadlines
//! - `http`: common request headers
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used items for convenience
pub use config::{ClientConfig, ConfigOverrides, Environment};
pub use http::default_headers;
