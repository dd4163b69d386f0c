use hotel_management::{scenario, HotelConfig};
use tracing::info;

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let report = scenario::run(HotelConfig::default())?;
    info!("Scenario completed");

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
