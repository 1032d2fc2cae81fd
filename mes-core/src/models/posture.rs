/// Qualitative strategic reading of a scenario, from the entrant's seat.
///
/// Classification is stateless: nothing transitions and nothing is stored.
/// Each recomputation reads the fresh profit and discount and re-derives the
/// posture in fixed priority order: a losing position is a price war no
/// matter how small the discount, and only profitable, moderate discounts
/// count as stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyPosture {
    /// Negative profit: a dominated strategy that triggers a price war
    PriceWar,

    /// Profitable, but the discount is aggressive enough to provoke the incumbent
    RetaliationRisk,

    /// Profitable at a discount the incumbent has no incentive to punish
    NashStable,
}

impl std::fmt::Display for StrategyPosture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::PriceWar => "price war (dominated strategy)",
            Self::RetaliationRisk => "retaliation risk (aggressive discount)",
            Self::NashStable => "Nash-stable region",
        };
        f.write_str(text)
    }
}
