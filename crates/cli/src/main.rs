use anyhow::Context;
use clap::Parser;
use ntopng_exporter_domain::CliOverrides;
use ntopng_exporter_jobs::{HostScrapeJob, InterfaceRefreshJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ntopng-exporter")]
#[command(version)]
#[command(about = "Scrapes ntopng host data into an in-memory snapshot")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// ntopng base URL, e.g. http://ntopng.local:3000
    #[arg(short = 'e', long)]
    endpoint: Option<String>,

    /// Scrape interval (e.g. 30s, 1m)
    #[arg(short = 'i', long)]
    scrape_interval: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Resolve interfaces, build a single snapshot and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        endpoint: cli.endpoint.clone(),
        scrape_interval: cli.scrape_interval.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config)?;

    info!("Starting ntopng-exporter v{}", env!("CARGO_PKG_VERSION"));
    info!(
        endpoint = %config.ntopng.endpoint,
        interfaces = ?config.host.interfaces_to_monitor,
        "Configuration loaded"
    );

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(&config, &adapters)?;

    // A bad interval must stop startup before any request goes out.
    let scrape_job = HostScrapeJob::new(
        use_cases.build_snapshot.clone(),
        &config.ntopng.scrape_interval,
    )?;
    let refresh_interval = config.ntopng.interface_refresh_interval()?;

    let table = use_cases
        .resolve_interfaces
        .execute()
        .await
        .context("was not able to resolve ntopng interfaces")?;
    info!(interfaces = ?table.names(), "Resolved ntopng interfaces");

    if cli.once {
        let snapshot = use_cases.build_snapshot.execute().await?;
        info!(hosts = snapshot.len(), "Single scrape completed");
        return Ok(());
    }

    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new()
        .with_shutdown_token(shutdown.clone())
        .with_host_scrape(scrape_job);

    if let Some(interval) = refresh_interval {
        runner = runner.with_interface_refresh(InterfaceRefreshJob::new(
            use_cases.resolve_interfaces.clone(),
            interval,
        ));
    }

    let running = runner.start();

    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Unable to listen for shutdown signal");
    }

    info!("Shutdown requested, stopping scheduler");
    running.shutdown().await;

    info!("ntopng-exporter stopped");
    Ok(())
}
