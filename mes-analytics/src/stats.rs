use mes_core::models::{HourMap, MarketSnapshot, TripRecord};
use time::OffsetDateTime;

/// Failure to derive market statistics.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The dataset loaded but contains zero rows, so no mean is defined
    #[error("the trip dataset is empty; market statistics are undefined")]
    EmptyDataset,
}

/// Aggregate a trip dataset into its immutable market snapshot.
///
/// Derives per-hour trip counts, per-hour mean fares, the overall mean fare,
/// and the mean hourly demand. The hour maps carry exactly the hours present
/// in the dataset, in ascending order.
pub fn aggregate(
    trips: &[TripRecord],
    as_of: OffsetDateTime,
) -> Result<MarketSnapshot, StatsError> {
    if trips.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let mut counts = HourMap::<u64>::default();
    let mut fare_sums = HourMap::<f64>::default();
    let mut total_fare = 0.0;

    for trip in trips {
        *counts.entry(trip.hour).or_insert(0) += 1;
        *fare_sums.entry(trip.hour).or_insert(0.0) += trip.fare_amount;
        total_fare += trip.fare_amount;
    }

    counts.sort_unstable_keys();
    fare_sums.sort_unstable_keys();

    let hourly_fare: HourMap<f64> = fare_sums
        .iter()
        .map(|(&hour, &sum)| (hour, sum / counts[&hour] as f64))
        .collect();

    let avg_market_fare = total_fare / trips.len() as f64;
    let base_demand =
        counts.values().map(|&n| n as f64).sum::<f64>() / counts.len() as f64;

    tracing::debug!(
        trips = trips.len(),
        hours = counts.len(),
        avg_market_fare,
        base_demand,
        "aggregated market snapshot"
    );

    Ok(MarketSnapshot {
        hourly_demand: counts,
        hourly_fare,
        avg_market_fare,
        base_demand,
        trip_count: trips.len() as u64,
        as_of,
    })
}

#[cfg(test)]
mod tests {
    use super::{StatsError, aggregate};
    use approx::assert_relative_eq;
    use mes_core::models::TripRecord;
    use time::macros::datetime;

    fn trip(hour: u8, fare_amount: f64) -> TripRecord {
        TripRecord { hour, fare_amount }
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let result = aggregate(&[], datetime!(2025-06-01 00:00:00 UTC));
        assert!(matches!(result, Err(StatsError::EmptyDataset)));
    }

    #[test]
    fn single_record_degenerates_cleanly() {
        let snapshot = aggregate(&[trip(9, 21.25)], datetime!(2025-06-01 00:00:00 UTC)).unwrap();

        assert_eq!(snapshot.trip_count, 1);
        assert_eq!(snapshot.demand_at(9), Some(1));
        assert_relative_eq!(snapshot.avg_market_fare, 21.25);
        assert_relative_eq!(snapshot.hourly_fare[&9], 21.25);
        assert_relative_eq!(snapshot.base_demand, 1.0);
    }

    #[test]
    fn hourly_demand_partitions_the_dataset() {
        let trips: Vec<_> = (0..120u32)
            .map(|i| trip((i % 5) as u8 * 4, 10.0 + (i % 7) as f64))
            .collect();

        let snapshot = aggregate(&trips, datetime!(2025-06-01 00:00:00 UTC)).unwrap();

        let counted: u64 = snapshot.hourly_demand.values().sum();
        assert_eq!(counted, trips.len() as u64);
        assert_eq!(snapshot.trip_count, trips.len() as u64);
    }

    #[test]
    fn hours_come_out_ascending_regardless_of_input_order() {
        let trips = [trip(20, 15.0), trip(3, 9.0), trip(8, 20.0), trip(3, 11.0)];
        let snapshot = aggregate(&trips, datetime!(2025-06-01 00:00:00 UTC)).unwrap();

        assert_eq!(snapshot.observed_hours().collect::<Vec<_>>(), vec![3, 8, 20]);
        assert_relative_eq!(snapshot.hourly_fare[&3], 10.0);
    }

    #[test]
    fn overall_mean_weights_trips_not_hours() {
        // 3 trips at 10.0 in one hour, 1 trip at 30.0 in another:
        // the overall mean is 15.0, not the 20.0 an hour-mean average would give.
        let trips = [trip(7, 10.0), trip(7, 10.0), trip(7, 10.0), trip(19, 30.0)];
        let snapshot = aggregate(&trips, datetime!(2025-06-01 00:00:00 UTC)).unwrap();

        assert_relative_eq!(snapshot.avg_market_fare, 15.0);
        assert_relative_eq!(snapshot.base_demand, 2.0);
    }
}
