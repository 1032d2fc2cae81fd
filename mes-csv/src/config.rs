//! Configuration types for the trip-dataset source.
//!
//! This module provides configuration options for locating the trip dataset
//! and for the optional remote fallback.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the CSV trip-dataset source.
///
/// # Examples
///
/// ```
/// use mes_csv::config::DatasetConfig;
/// use std::path::PathBuf;
///
/// // Local file next to the process (default)
/// let config = DatasetConfig::default();
///
/// // Local file with a hosted fallback
/// let config = DatasetConfig {
///     path: PathBuf::from("data/trips.csv"),
///     fallback_url: Some("https://example.com/trips.csv".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Path of the local trip CSV file
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// URL fetched once if the local file is absent. If None, a missing
    /// local file is fatal
    #[serde(default)]
    pub fallback_url: Option<String>,
}

fn default_path() -> PathBuf {
    PathBuf::from("trips.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            fallback_url: None,
        }
    }
}
