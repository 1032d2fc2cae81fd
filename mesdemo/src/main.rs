use mes_axum::{AppState, start_server};
use mes_core::ports::TripSource as _;
use mes_csv::CsvTripSource;
use mesdemo::{AppConfig, Cli};
use time::OffsetDateTime;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we likely want to subscribe to these events so we can
    // write them to stdio and possibly some durable location.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args and create config with proper layering
    let cli = Cli::import()?;
    let AppConfig { server, dataset } = AppConfig::load(&cli)?;

    // The dataset is loaded exactly once per process and then frozen; every
    // request recomputes from this snapshot, so there is nothing to refresh.
    let trips = CsvTripSource::new(dataset).load()?;
    let snapshot = mes_analytics::aggregate(&trips, OffsetDateTime::now_utc())?;

    tracing::info!(
        trips = snapshot.trip_count,
        hours = snapshot.hourly_demand.len(),
        avg_market_fare = snapshot.avg_market_fare,
        "market snapshot ready"
    );

    start_server(server, AppState::new(snapshot)).await?;

    Ok(())
}
