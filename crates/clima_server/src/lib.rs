//! REST API server for the Clima temperature dashboard
//!
//! This crate exposes the temperature store and interpolation engine over
//! HTTP: city listing, monthly series with a Lagrange estimate at an
//! arbitrary query month, and the chart figure the dashboard renders.

pub mod chart;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
