//! REST API endpoints for scenario evaluation.
//!
//! These are the recompute-on-every-lever-change routes: each request carries
//! the current lever values and gets back freshly derived figures. Nothing is
//! cached or persisted between requests.

use crate::AppState;
use aide::axum::{ApiRouter, routing::get};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use mes_analytics::{ScenarioError, classify, evaluate, profit_curve};
use mes_core::models::{
    DEFAULT_DISCOUNT_PCT, DEFAULT_SUBSIDY_PER_RIDE, ProfitCurve, ScenarioInput, ScenarioReport,
};
use tracing::{Level, event};

/// Creates a router with scenario-related endpoints.
pub fn router() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route_with("/", get(evaluate_scenario), |route| route.tag("scenario"))
        .api_route_with("/curve", get(sweep_curve), |route| route.tag("scenario"))
}

/// Query parameters for a single scenario evaluation.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
struct ScenarioQuery {
    /// Introductory discount in percent (lever range 0–30)
    #[serde(default = "default_discount")]
    discount_pct: f64,

    /// Per-ride subsidy (lever range 0–5)
    #[serde(default = "default_subsidy")]
    subsidy_per_ride: f64,

    /// Hour of day to enter the market; must be an observed hour
    entry_hour: u8,
}

/// Query parameters for the profit-vs-discount sweep.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
struct CurveQuery {
    /// Per-ride subsidy held fixed across the sweep
    #[serde(default = "default_subsidy")]
    subsidy_per_ride: f64,
}

fn default_discount() -> f64 {
    DEFAULT_DISCOUNT_PCT
}

fn default_subsidy() -> f64 {
    DEFAULT_SUBSIDY_PER_RIDE
}

/// Evaluate one entry scenario at the given lever values.
///
/// # Returns
///
/// - `200 OK`: The scenario report (levers, derived figures, posture)
/// - `400 Bad Request`: Malformed query parameters
/// - `422 Unprocessable Entity`: The entry hour is not observed in the dataset
async fn evaluate_scenario(
    State(state): State<AppState>,
    Query(query): Query<ScenarioQuery>,
) -> Result<Json<ScenarioReport>, StatusCode> {
    let input = ScenarioInput {
        discount_pct: query.discount_pct,
        subsidy_per_ride: query.subsidy_per_ride,
        entry_hour: query.entry_hour,
    };

    match evaluate(&state.snapshot, input) {
        Ok(outcome) => {
            let posture = classify(outcome.profit, input.discount_pct);
            Ok(Json(ScenarioReport {
                input,
                outcome,
                posture,
            }))
        }
        Err(err @ ScenarioError::InvalidHour { .. }) => {
            event!(Level::WARN, err = err.to_string());
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
    }
}

/// Sweep expected profit across every integer discount from 0 to 30.
///
/// # Returns
///
/// - `200 OK`: 31 curve points, discount ascending
/// - `400 Bad Request`: Malformed query parameters
async fn sweep_curve(
    State(state): State<AppState>,
    Query(query): Query<CurveQuery>,
) -> Json<ProfitCurve> {
    Json(profit_curve(&state.snapshot, query.subsidy_per_ride))
}
