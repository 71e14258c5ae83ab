//! Part Scout - electronic component price aggregator
//!
//! Fans a part number out to several vendor price sources plus substitute
//! and risk lookups, caches every lookup briefly, degrades failed sources to
//! fallback data, and serves the merged result over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod services;
pub mod sources;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use services::{Aggregator, QueryService};
pub use tasks::spawn_cleanup_task;
