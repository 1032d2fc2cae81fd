#![warn(missing_docs)]
//! CSV implementation of the trip-dataset port for market-entry analysis.
//!
//! The adapter reads a tabular trip file with at least `hour` and
//! `fare_amount` columns. When the configured local file is absent it makes
//! a single attempt against a configured remote URL. There is no retry
//! logic, because dataset acquisition is a one-time, cache-once operation
//! per process lifetime. Parsing is strict about schema (a missing column is
//! fatal) but tolerant about rows: malformed or out-of-domain rows are
//! skipped and counted rather than failing the load.

use mes_core::{models::TripRecord, ports::TripSource};
use std::{fs::File, io::Read, path::PathBuf};

pub mod config;
use config::DatasetConfig;

mod parse;
pub use parse::{ParsedTrips, parse_trips};

/// The ways dataset acquisition can fail.
///
/// All of these are fatal at the point of occurrence: the caller is expected
/// to surface the error and halt, not retry.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The local file is missing and no remote fallback is configured
    #[error("dataset unavailable: `{0}` not found and no fallback url is configured")]
    NotFound(PathBuf),

    /// The local file is missing and the remote fallback request failed
    #[error("dataset unavailable: fallback request to `{url}` failed")]
    Fallback {
        /// The fallback URL that was attempted
        url: String,
        /// The underlying transport or status error
        #[source]
        source: Box<ureq::Error>,
    },

    /// The dataset is missing a required column
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    /// The file exists but is not readable as CSV
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Any other I/O failure while reading the local file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A [`TripSource`] backed by a local CSV file with a remote fallback.
///
/// # Example
///
/// ```no_run
/// use mes_core::ports::TripSource as _;
/// use mes_csv::{CsvTripSource, config::DatasetConfig};
///
/// # fn example() -> Result<(), mes_csv::SourceError> {
/// let source = CsvTripSource::new(DatasetConfig::default());
/// let trips = source.load()?;
/// # Ok(())
/// # }
/// ```
pub struct CsvTripSource {
    config: DatasetConfig,
}

impl CsvTripSource {
    /// Create a source for the configured dataset location.
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    fn fetch_fallback(&self, url: &str) -> Result<ParsedTrips, SourceError> {
        tracing::warn!(
            path = %self.config.path.display(),
            url,
            "local dataset missing, fetching remote fallback"
        );

        let response = ureq::get(url).call().map_err(|e| SourceError::Fallback {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;
        parse_trips(body.as_slice())
    }
}

impl TripSource for CsvTripSource {
    type Error = SourceError;

    fn load(&self) -> Result<Vec<TripRecord>, Self::Error> {
        let parsed = match File::open(&self.config.path) {
            Ok(file) => parse_trips(std::io::BufReader::new(file))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => match &self.config.fallback_url {
                Some(url) => self.fetch_fallback(url)?,
                None => return Err(SourceError::NotFound(self.config.path.clone())),
            },
            Err(e) => return Err(e.into()),
        };

        if parsed.rows_skipped > 0 {
            tracing::warn!(
                rows_skipped = parsed.rows_skipped,
                rows_kept = parsed.trips.len(),
                "skipped malformed or out-of-domain trip rows"
            );
        }

        tracing::info!(trips = parsed.trips.len(), "trip dataset loaded");
        Ok(parsed.trips)
    }
}
