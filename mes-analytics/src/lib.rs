//! The analytical engine behind the market-entry strategy tools.
//!
//! Everything in this crate is a pure function of an immutable
//! [`MarketSnapshot`](mes_core::models::MarketSnapshot) and the chosen
//! decision levers. The presentation boundary is expected to call back into
//! these functions on every lever change; there is no internal state, no
//! caching, and no suspension point anywhere in the evaluation path.

mod demand;
pub use demand::{ELASTICITY, captured_demand};

mod profit;
pub use profit::expected_profit;

mod scenario;
pub use scenario::{MAX_DISCOUNT_PCT, ScenarioError, evaluate, profit_curve};

mod stats;
pub use stats::{StatsError, aggregate};

mod strategy;
pub use strategy::classify;
