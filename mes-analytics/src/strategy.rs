use mes_core::models::StrategyPosture;

/// Discounts above this provoke the incumbent even when profitable.
const RETALIATION_DISCOUNT_PCT: f64 = 20.0;

/// Classify a scenario's strategic posture from its profit and discount.
///
/// Priority order is fixed: losses dominate everything, then aggression,
/// then stability.
pub fn classify(profit: f64, discount_pct: f64) -> StrategyPosture {
    if profit < 0.0 {
        StrategyPosture::PriceWar
    } else if discount_pct > RETALIATION_DISCOUNT_PCT {
        StrategyPosture::RetaliationRisk
    } else {
        StrategyPosture::NashStable
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use mes_core::models::StrategyPosture;
    use rstest::rstest;

    #[rstest]
    #[case(-10.0, 5.0, StrategyPosture::PriceWar)]
    #[case(50.0, 25.0, StrategyPosture::RetaliationRisk)]
    #[case(50.0, 10.0, StrategyPosture::NashStable)]
    // losses dominate, even at aggressive discounts
    #[case(-0.01, 25.0, StrategyPosture::PriceWar)]
    // the boundary discount is still stable; only strictly-greater provokes
    #[case(50.0, 20.0, StrategyPosture::NashStable)]
    // zero profit is not a loss
    #[case(0.0, 5.0, StrategyPosture::NashStable)]
    fn classification_table(
        #[case] profit: f64,
        #[case] discount_pct: f64,
        #[case] expected: StrategyPosture,
    ) {
        assert_eq!(classify(profit, discount_pct), expected);
    }
}
