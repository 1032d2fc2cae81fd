use crate::{captured_demand, expected_profit};
use mes_core::models::{CurvePoint, MarketSnapshot, ProfitCurve, ScenarioInput, ScenarioOutcome};

/// Largest discount percentage the levers expose; the sweep ends here.
pub const MAX_DISCOUNT_PCT: u8 = 30;

/// Failure to evaluate a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// The chosen entry hour has no trips in the dataset.
    ///
    /// Selectors populated from the snapshot's observed hours can never
    /// produce this; it guards hand-built inputs.
    #[error("hour {hour} is not observed in the trip dataset")]
    InvalidHour {
        /// The offending entry hour
        hour: u8,
    },
}

/// The price the entrant charges after discounting the market average fare.
fn entry_price(avg_market_fare: f64, discount_pct: f64) -> f64 {
    avg_market_fare * (1.0 - discount_pct / 100.0)
}

/// Evaluate a single entry scenario against the market snapshot.
///
/// The demand baseline here is the *entry hour's* observed trip count, since
/// the entrant captures riders in the hour it actually enters. Contrast with
/// [`profit_curve`], which sweeps against the global mean hourly demand.
pub fn evaluate(
    snapshot: &MarketSnapshot,
    input: ScenarioInput,
) -> Result<ScenarioOutcome, ScenarioError> {
    let baseline = snapshot
        .demand_at(input.entry_hour)
        .ok_or(ScenarioError::InvalidHour {
            hour: input.entry_hour,
        })?;

    let entry_price = entry_price(snapshot.avg_market_fare, input.discount_pct);
    let captured_demand = captured_demand(input.discount_pct, baseline as f64);
    let profit = expected_profit(entry_price, captured_demand, input.subsidy_per_ride);

    tracing::debug!(
        discount_pct = input.discount_pct,
        subsidy_per_ride = input.subsidy_per_ride,
        entry_hour = input.entry_hour,
        entry_price,
        captured_demand,
        profit,
        "evaluated entry scenario"
    );

    Ok(ScenarioOutcome {
        entry_price,
        captured_demand,
        profit,
    })
}

/// Sweep profit across every integer discount in `0..=MAX_DISCOUNT_PCT`.
///
/// The sweep baselines demand on the snapshot's global mean hourly demand,
/// not on any particular entry hour, so the curve describes an "average hour"
/// rather than the selected one. This asymmetry with [`evaluate`] is part of
/// the model's contract: unifying the two baselines would change every
/// published profit figure, so it is deliberately not done here.
pub fn profit_curve(snapshot: &MarketSnapshot, subsidy_per_ride: f64) -> ProfitCurve {
    let curve = (0..=MAX_DISCOUNT_PCT)
        .map(|d| {
            let price = entry_price(snapshot.avg_market_fare, d as f64);
            let demand = captured_demand(d as f64, snapshot.base_demand);
            CurvePoint {
                discount_pct: d,
                profit: expected_profit(price, demand, subsidy_per_ride),
            }
        })
        .collect();

    tracing::debug!(subsidy_per_ride, points = MAX_DISCOUNT_PCT + 1, "swept profit curve");

    curve
}
