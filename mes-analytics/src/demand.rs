/// Fixed sensitivity of captured demand to the introductory discount.
///
/// Each percentage point of discount lifts captured demand by 4% of the
/// baseline.
pub const ELASTICITY: f64 = 0.04;

/// Estimate the trip volume captured at a given discount.
///
/// Linear in the discount: `baseline * (1 + ELASTICITY * discount_pct)`.
/// The formula is intentionally unguarded: callers constrain the discount to
/// the lever range, and a negative baseline (not a meaningful input) passes
/// through arithmetically rather than being rejected here.
pub fn captured_demand(discount_pct: f64, baseline_demand: f64) -> f64 {
    baseline_demand * (1.0 + ELASTICITY * discount_pct)
}

#[cfg(test)]
mod tests {
    use super::captured_demand;
    use approx::assert_relative_eq;

    #[test]
    fn zero_discount_changes_nothing() {
        for baseline in [0.0, 1.0, 75.0, 12345.6] {
            assert_relative_eq!(captured_demand(0.0, baseline), baseline);
        }
    }

    #[test]
    fn strictly_increasing_in_discount_for_positive_baseline() {
        let baseline = 75.0;
        let mut previous = captured_demand(0.0, baseline);
        for d in 1..=30 {
            let next = captured_demand(d as f64, baseline);
            assert!(next > previous, "demand must grow with discount: {next} <= {previous}");
            previous = next;
        }
    }

    #[test]
    fn linear_in_discount() {
        let baseline = 100.0;
        let lift_10 = captured_demand(10.0, baseline) - baseline;
        let lift_20 = captured_demand(20.0, baseline) - baseline;
        assert_relative_eq!(lift_20, 2.0 * lift_10);
    }
}
