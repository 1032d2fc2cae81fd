use super::StrategyPosture;

/// The discount the dashboard levers start at, in percent.
pub const DEFAULT_DISCOUNT_PCT: f64 = 15.0;

/// The per-ride subsidy the dashboard levers start at.
pub const DEFAULT_SUBSIDY_PER_RIDE: f64 = 2.0;

/// The three decision levers for a single entry scenario.
///
/// By convention the controls producing these values constrain the discount
/// to [0, 30] percent and the subsidy to [0, 5]; the analytical formulas are
/// defined over all reals and do not re-check those bounds. The entry hour
/// must be one of the hours observed in the dataset; evaluation fails
/// otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioInput {
    /// Introductory discount off the market average fare, in percent
    pub discount_pct: f64,

    /// Cost absorbed per ride beyond what the rider is charged
    pub subsidy_per_ride: f64,

    /// Hour of day chosen for market entry
    pub entry_hour: u8,
}

/// The derived figures for one evaluated scenario.
///
/// Outcomes carry no independent state: they are recomputed from the frozen
/// snapshot on every lever change and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioOutcome {
    /// Price charged per ride after applying the discount to the market average fare
    pub entry_price: f64,

    /// Estimated trip volume attracted at the chosen discount
    pub captured_demand: f64,

    /// Expected profit at the captured volume, net of subsidies
    pub profit: f64,
}

/// Everything the presentation layer needs to render one scenario.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioReport {
    /// The levers this report was computed from
    pub input: ScenarioInput,

    /// The derived entry price, captured demand, and profit
    pub outcome: ScenarioOutcome,

    /// Qualitative strategic reading of the outcome
    pub posture: StrategyPosture,
}
