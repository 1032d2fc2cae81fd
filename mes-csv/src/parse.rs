use crate::SourceError;
use mes_core::models::TripRecord;
use std::io::Read;

/// The result of parsing a trip CSV: the kept records plus how many rows
/// were dropped on the floor.
#[derive(Debug)]
pub struct ParsedTrips {
    /// Records that parsed and lie within the analytical domain
    pub trips: Vec<TripRecord>,
    /// Rows skipped for being malformed or out of domain
    pub rows_skipped: usize,
}

/// Parse trip records out of CSV data.
///
/// The first row must be a header containing `hour` and `fare_amount`
/// columns (any additional columns are ignored). Rows whose values are
/// missing, unparseable, or outside the analytical domain (an hour above
/// 23, a negative or non-finite fare) are skipped and counted, not fatal.
pub fn parse_trips<R: Read>(reader: R) -> Result<ParsedTrips, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let hour_idx = find_column(&headers, "hour").ok_or(SourceError::MissingColumn("hour"))?;
    let fare_idx =
        find_column(&headers, "fare_amount").ok_or(SourceError::MissingColumn("fare_amount"))?;

    let mut trips = Vec::new();
    let mut rows_skipped = 0usize;

    for record in reader.records() {
        let record = record?;

        let Some(trip) = parse_row(&record, hour_idx, fare_idx) else {
            rows_skipped += 1;
            continue;
        };

        trips.push(trip);
    }

    Ok(ParsedTrips {
        trips,
        rows_skipped,
    })
}

/// Locate a column by name, tolerating surrounding whitespace, a UTF-8 BOM
/// on the first header, and case differences.
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| {
        h.trim()
            .trim_start_matches('\u{feff}')
            .eq_ignore_ascii_case(name)
    })
}

fn parse_row(record: &csv::StringRecord, hour_idx: usize, fare_idx: usize) -> Option<TripRecord> {
    let hour = record.get(hour_idx)?.parse::<u8>().ok()?;
    let fare_amount = record.get(fare_idx)?.parse::<f64>().ok()?;

    let trip = TripRecord { hour, fare_amount };
    trip.in_domain().then_some(trip)
}
