//! HTTP API server for the flipboard score aggregation service.
//!
//! This module provides the read-only JSON API on top of the aggregation
//! library using axum: leaderboard, judge and participant views, event
//! summaries, and the reference-table passthroughs, plus optional static
//! serving of the dashboard bundle.

mod config;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{
    AggregationConfig, Config, CorsConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use error::ApiError;
pub use logging::init as init_logging;
pub use routes::router;
pub use state::{AppState, StateError};
