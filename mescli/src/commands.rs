use super::IOArgs;
use clap::Subcommand;
use mes_core::models::{DEFAULT_DISCOUNT_PCT, DEFAULT_SUBSIDY_PER_RIDE};

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a single entry scenario and report the derived figures
    Evaluate {
        #[command(flatten)]
        io: IOArgs,

        /// Introductory discount off the market average fare, in percent
        #[arg(short, long, default_value_t = DEFAULT_DISCOUNT_PCT)]
        discount_pct: f64,

        /// Cost absorbed per ride beyond what the rider is charged
        #[arg(short, long, default_value_t = DEFAULT_SUBSIDY_PER_RIDE)]
        subsidy_per_ride: f64,

        /// Hour of day chosen for market entry
        #[arg(short, long)]
        entry_hour: u8,
    },

    /// Sweep the profit-vs-discount curve with the subsidy held fixed
    Curve {
        #[command(flatten)]
        io: IOArgs,

        /// Cost absorbed per ride beyond what the rider is charged
        #[arg(short, long, default_value_t = DEFAULT_SUBSIDY_PER_RIDE)]
        subsidy_per_ride: f64,
    },

    /// Aggregate the trip dataset and report the market snapshot
    Stats {
        #[command(flatten)]
        io: IOArgs,
    },
}
