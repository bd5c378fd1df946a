use anyhow::Context;
use sklad_cli::Session;
use sklad_core::{app_config::Config, Warehouse};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // stdout carries the menu, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        "Starting {} (zero stock policy: {:?})",
        config.warehouse.name,
        config.pricing.zero_stock_policy
    );

    let warehouse = Warehouse::with_pricing(config.warehouse.name, config.pricing);
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), warehouse);
    session.run().context("Console session failed")?;

    Ok(())
}
