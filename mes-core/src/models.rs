mod curve;
mod posture;
mod scenario;
mod snapshot;
mod trip;

pub use curve::{CurvePoint, ProfitCurve};
pub use posture::StrategyPosture;
pub use scenario::{
    DEFAULT_DISCOUNT_PCT, DEFAULT_SUBSIDY_PER_RIDE, ScenarioInput, ScenarioOutcome, ScenarioReport,
};
pub use snapshot::{HourMap, MarketSnapshot};
pub use trip::TripRecord;
