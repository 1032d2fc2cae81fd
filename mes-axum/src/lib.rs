#![warn(missing_docs)]
//! A REST API for market-entry scenario evaluation.
//!
//! The API is a thin, stateless computation surface over one frozen
//! [`MarketSnapshot`](mes_core::models::MarketSnapshot): the dashboard (or
//! any other consumer) re-queries `/scenario` and `/scenario/curve` on every
//! lever change, and the handlers recompute from the snapshot each time.
//! There is nothing to write, so every route is a `GET`.

mod market_routes;
mod scenario_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use mes_core::models::MarketSnapshot;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::ApiConfig;

/// Shared state for all request handlers: the market snapshot computed once
/// at startup. Cloning is cheap; the snapshot itself is never mutated.
#[derive(Clone)]
pub struct AppState {
    /// The frozen statistical picture every evaluation reads from
    pub snapshot: Arc<MarketSnapshot>,
}

impl AppState {
    /// Wrap a computed snapshot for sharing across handlers.
    pub fn new(snapshot: MarketSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct a full API router with the given state
pub fn router(state: AppState) -> axum::Router {
    let mut api = OpenApi::default();
    ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/market", market_routes::router())
        .nest("/scenario", scenario_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api))) // Arc is very important here or you will face massive memory and performance issues
        // The dashboard frontend is served from elsewhere, so cross-origin reads are the norm
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!(
        "Listening for requests on {}",
        listener.local_addr().expect("listener has a local address")
    );

    let service = router(state);
    axum::serve(listener, service).await
}
