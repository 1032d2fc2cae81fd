use time::OffsetDateTime;

/// A map with deterministic, ascending-hour iteration order.
///
/// Hour-keyed series feed charts and JSON responses directly, so iteration
/// order is part of the contract: keys are exactly the distinct hours present
/// in the dataset, in ascending order.
pub type HourMap<V> = indexmap::IndexMap<u8, V, rustc_hash::FxBuildHasher>;

/// The immutable statistical picture of the incumbent's market.
///
/// A snapshot is derived exactly once per dataset load and then shared by
/// reference with every computation; scenario evaluation never mutates it.
/// All downstream values (entry prices, captured demand, profit curves)
/// are pure functions of this snapshot and the chosen levers.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Trip count per observed hour of day
    pub hourly_demand: HourMap<u64>,

    /// Mean fare per observed hour of day
    pub hourly_fare: HourMap<f64>,

    /// Mean fare across the entire dataset
    pub avg_market_fare: f64,

    /// Mean of the hourly trip counts across all observed hours
    pub base_demand: f64,

    /// Number of trip records aggregated into this snapshot
    pub trip_count: u64,

    /// When this snapshot was computed
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub as_of: OffsetDateTime,
}

impl MarketSnapshot {
    /// The trip count observed at the given hour, if that hour is observed.
    pub fn demand_at(&self, hour: u8) -> Option<u64> {
        self.hourly_demand.get(&hour).copied()
    }

    /// The hours present in the dataset, in ascending order.
    pub fn observed_hours(&self) -> impl Iterator<Item = u8> {
        self.hourly_demand.keys().copied()
    }
}
