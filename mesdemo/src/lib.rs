#![warn(missing_docs)]
//! The demonstration server for the market-entry strategy tools.
//!
//! Wires the pieces together the way a deployment would: command-line
//! arguments, layered configuration, tracing, a one-time dataset load, and
//! the HTTP server from `mes-axum`.

mod cli;
pub use cli::Cli;

mod config;
pub use config::AppConfig;
