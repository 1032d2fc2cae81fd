//! REST API endpoint for the market snapshot.
//!
//! The snapshot is the historical picture of the incumbent platform: per-hour
//! demand, per-hour average fares, and the overall benchmarks. It is computed
//! once at startup and does not change with any decision lever, so this route
//! simply serves the shared copy.

use crate::AppState;
use aide::axum::{ApiRouter, routing::get};
use axum::{Json, extract::State};
use mes_core::models::MarketSnapshot;
use std::sync::Arc;

/// Creates a router with the market snapshot endpoint.
pub fn router() -> ApiRouter<AppState> {
    ApiRouter::new().api_route_with("/", get(get_market), |route| route.tag("market"))
}

/// Retrieve the aggregated market snapshot.
///
/// Feeds the hourly-demand bar chart, the hourly-fare line chart, and the
/// market benchmark figures.
///
/// # Returns
///
/// - `200 OK`: The full snapshot, hours in ascending order
async fn get_market(State(state): State<AppState>) -> Json<Arc<MarketSnapshot>> {
    Json(state.snapshot.clone())
}
