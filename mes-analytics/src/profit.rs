/// Expected profit at a price, volume, and per-ride subsidy.
///
/// `demand * (price - subsidy)`, with no floor at zero: losing scenarios
/// report their losses, and the classifier downstream is what gives a
/// negative figure its strategic meaning.
pub fn expected_profit(price: f64, demand: f64, subsidy: f64) -> f64 {
    (price * demand) - (subsidy * demand)
}

#[cfg(test)]
mod tests {
    use super::expected_profit;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(16.5, 140.0, 1.0, 2170.0)]
    #[case(10.0, 0.0, 2.0, 0.0)]
    #[case(1.0, 50.0, 3.0, -100.0)]
    fn matches_margin_times_volume(
        #[case] price: f64,
        #[case] demand: f64,
        #[case] subsidy: f64,
        #[case] expected: f64,
    ) {
        assert_relative_eq!(expected_profit(price, demand, subsidy), expected);
        assert_relative_eq!(
            expected_profit(price, demand, subsidy),
            demand * (price - subsidy)
        );
    }
}
