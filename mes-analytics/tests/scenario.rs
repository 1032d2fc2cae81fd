use approx::assert_relative_eq;
use mes_analytics::{aggregate, classify, evaluate, profit_curve};
use mes_core::models::{MarketSnapshot, ScenarioInput, StrategyPosture, TripRecord};
use rstest::*;
use time::macros::datetime;

/// The reference market: hour 8 has 100 trips at a mean fare of 20.0, hour 20
/// has 50 trips at a mean fare of 15.0.
#[fixture]
fn two_hour_market() -> MarketSnapshot {
    let mut trips = Vec::new();
    trips.extend((0..100).map(|_| TripRecord {
        hour: 8,
        fare_amount: 20.0,
    }));
    trips.extend((0..50).map(|_| TripRecord {
        hour: 20,
        fare_amount: 15.0,
    }));

    aggregate(&trips, datetime!(2025-06-01 00:00:00 UTC)).unwrap()
}

#[rstest]
fn snapshot_aggregates_reference_market(two_hour_market: MarketSnapshot) {
    assert_eq!(two_hour_market.trip_count, 150);
    assert_eq!(two_hour_market.demand_at(8), Some(100));
    assert_eq!(two_hour_market.demand_at(20), Some(50));
    assert_eq!(two_hour_market.demand_at(12), None);

    // (100 * 20 + 50 * 15) / 150
    assert_relative_eq!(two_hour_market.avg_market_fare, 2750.0 / 150.0);
    assert_relative_eq!(two_hour_market.base_demand, 75.0);
    assert_relative_eq!(two_hour_market.hourly_fare[&8], 20.0);
    assert_relative_eq!(two_hour_market.hourly_fare[&20], 15.0);
}

#[rstest]
fn reference_scenario_end_to_end(two_hour_market: MarketSnapshot) {
    let outcome = evaluate(
        &two_hour_market,
        ScenarioInput {
            discount_pct: 10.0,
            subsidy_per_ride: 1.0,
            entry_hour: 8,
        },
    )
    .unwrap();

    assert_relative_eq!(outcome.entry_price, 16.5);
    assert_relative_eq!(outcome.captured_demand, 140.0);
    assert_relative_eq!(outcome.profit, 2170.0, max_relative = 1e-12);

    assert_eq!(classify(outcome.profit, 10.0), StrategyPosture::NashStable);
}

#[rstest]
fn unknown_entry_hour_is_rejected(two_hour_market: MarketSnapshot) {
    let result = evaluate(
        &two_hour_market,
        ScenarioInput {
            discount_pct: 10.0,
            subsidy_per_ride: 1.0,
            entry_hour: 12,
        },
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("12"));
}

#[rstest]
fn curve_sweeps_all_discounts_ascending(two_hour_market: MarketSnapshot) {
    let curve = profit_curve(&two_hour_market, 1.0);

    assert_eq!(curve.len(), 31);
    for (d, point) in curve.iter().enumerate() {
        assert_eq!(point.discount_pct as usize, d);
    }

    // At discount 0 the sweep baselines on the global mean hourly demand:
    // 75 * (2750/150 - 1.0) = 1300
    assert_relative_eq!(curve[0].profit, 1300.0, max_relative = 1e-12);
}

/// The single-point path baselines demand on the entry hour, the sweep on the
/// global mean. With hour 8's demand (100) differing from the base demand
/// (75), the two paths must disagree at the same discount; this divergence
/// is part of the model's contract.
#[rstest]
fn curve_and_scenario_baselines_diverge(two_hour_market: MarketSnapshot) {
    let subsidy = 1.0;
    let outcome = evaluate(
        &two_hour_market,
        ScenarioInput {
            discount_pct: 0.0,
            subsidy_per_ride: subsidy,
            entry_hour: 8,
        },
    )
    .unwrap();

    let curve = profit_curve(&two_hour_market, subsidy);

    assert_ne!(
        two_hour_market.demand_at(8).unwrap() as f64,
        two_hour_market.base_demand
    );
    assert!(
        (outcome.profit - curve[0].profit).abs() > 1.0,
        "entry-hour and global baselines should produce different profits: {} vs {}",
        outcome.profit,
        curve[0].profit
    );
}

#[rstest]
fn losing_scenarios_classify_as_price_war(two_hour_market: MarketSnapshot) {
    // A subsidy far above the discounted fare guarantees a negative margin.
    let outcome = evaluate(
        &two_hour_market,
        ScenarioInput {
            discount_pct: 15.0,
            subsidy_per_ride: 50.0,
            entry_hour: 20,
        },
    )
    .unwrap();

    assert!(outcome.profit < 0.0);
    assert_eq!(
        classify(outcome.profit, 15.0),
        StrategyPosture::PriceWar
    );
}
