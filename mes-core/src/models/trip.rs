/// A single observed trip on the incumbent platform.
///
/// Trip records are read-only inputs sourced entirely from the historical
/// dataset; nothing in this system ever mutates or writes them back. Only the
/// two columns the analysis consumes are modeled; additional dataset columns
/// are an acquisition-side concern.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRecord {
    /// Hour of day the trip started, 0–23
    pub hour: u8,

    /// The fare paid for the trip. Non-negative and finite.
    pub fare_amount: f64,
}

impl TripRecord {
    /// Whether this record lies in the domain the analysis is defined over.
    ///
    /// Acquisition adapters use this to decide which rows to keep; the
    /// analytical engine assumes it holds for every record it receives.
    pub fn in_domain(&self) -> bool {
        self.hour < 24 && self.fare_amount.is_finite() && self.fare_amount >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::TripRecord;

    #[test]
    fn domain_check_rejects_bad_records() {
        assert!(
            TripRecord {
                hour: 23,
                fare_amount: 0.0
            }
            .in_domain()
        );
        assert!(
            !TripRecord {
                hour: 24,
                fare_amount: 10.0
            }
            .in_domain()
        );
        assert!(
            !TripRecord {
                hour: 8,
                fare_amount: -1.0
            }
            .in_domain()
        );
        assert!(
            !TripRecord {
                hour: 8,
                fare_amount: f64::NAN
            }
            .in_domain()
        );
    }
}
