use clap::Parser;
use mes_core::models::{MarketSnapshot, ScenarioInput, ScenarioReport};
use time::OffsetDateTime;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Evaluate {
                io,
                discount_pct,
                subsidy_per_ride,
                entry_hour,
            } => {
                let snapshot = load_snapshot(&io)?;
                let input = ScenarioInput {
                    discount_pct,
                    subsidy_per_ride,
                    entry_hour,
                };
                let outcome = mes_analytics::evaluate(&snapshot, input)?;
                let posture = mes_analytics::classify(outcome.profit, discount_pct);

                let output = io.write()?;
                serde_json::to_writer_pretty(
                    output,
                    &ScenarioReport {
                        input,
                        outcome,
                        posture,
                    },
                )?;
            }
            Commands::Curve {
                io,
                subsidy_per_ride,
            } => {
                let snapshot = load_snapshot(&io)?;
                let curve = mes_analytics::profit_curve(&snapshot, subsidy_per_ride);
                let output = io.write()?;
                serde_json::to_writer_pretty(output, &curve)?;
            }
            Commands::Stats { io } => {
                let snapshot = load_snapshot(&io)?;
                let output = io.write()?;
                serde_json::to_writer_pretty(output, &snapshot)?;
            }
        }

        Ok(())
    }
}

/// Read the trip CSV from the input side and aggregate it into a snapshot.
fn load_snapshot(io: &IOArgs) -> anyhow::Result<MarketSnapshot> {
    let parsed = mes_csv::parse_trips(io.read()?)?;
    if parsed.rows_skipped > 0 {
        eprintln!(
            "warning: skipped {} malformed or out-of-domain rows",
            parsed.rows_skipped
        );
    }

    let snapshot = mes_analytics::aggregate(&parsed.trips, OffsetDateTime::now_utc())?;
    Ok(snapshot)
}
