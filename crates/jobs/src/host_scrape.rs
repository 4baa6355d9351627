use crate::scheduler_state::{SchedulerState, StateCell};
use ntopng_exporter_application::use_cases::BuildSnapshotUseCase;
use ntopng_exporter_domain::config::parse_interval;
use ntopng_exporter_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Background job that rebuilds the host snapshot on a fixed interval.
///
///   - The first tick is consumed immediately, so the first scrape happens
///     one interval after start
///   - The interval is re-armed after every cycle, failed or not
///   - Cancellation is only observed between cycles; a running cycle finishes
pub struct HostScrapeJob {
    build_snapshot: Arc<BuildSnapshotUseCase>,
    interval: Duration,
    state: StateCell,
    completed_cycles: AtomicU64,
    failed_cycles: AtomicU64,
    shutdown: CancellationToken,
}

impl HostScrapeJob {
    /// Fails with `IntervalParse` when `scrape_interval` is not a valid, non-zero duration.
    pub fn new(
        build_snapshot: Arc<BuildSnapshotUseCase>,
        scrape_interval: &str,
    ) -> Result<Self, DomainError> {
        let interval = parse_interval(scrape_interval)?;
        Ok(Self::with_interval(build_snapshot, interval))
    }

    pub fn with_interval(build_snapshot: Arc<BuildSnapshotUseCase>, interval: Duration) -> Self {
        Self {
            build_snapshot,
            interval,
            state: StateCell::new(),
            completed_cycles: AtomicU64::new(0),
            failed_cycles: AtomicU64::new(0),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> SchedulerState {
        self.state.get()
    }

    /// Cycles that ran to completion, successful or not.
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles.load(Ordering::Relaxed)
    }

    pub fn failed_cycles(&self) -> u64 {
        self.failed_cycles.load(Ordering::Relaxed)
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval = ?self.interval, "Starting host scrape job");

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;
        self.state.set(SchedulerState::Waiting);

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => {
                    info!("HostScrapeJob: shutting down");
                    break;
                }
                _ = interval.tick() => self.run_cycle().await,
            }
        }

        self.state.set(SchedulerState::Stopped);
    }

    async fn run_cycle(&self) {
        self.state.set(SchedulerState::Running);

        match self.build_snapshot.execute().await {
            Ok(snapshot) => {
                debug!(hosts = snapshot.len(), "HostScrapeJob: cycle completed");
            }
            Err(e) => {
                self.failed_cycles.fetch_add(1, Ordering::Relaxed);
                error!(
                    error = %e,
                    "Encountered an error while scraping interfaces, keeping previous snapshot"
                );
            }
        }

        self.completed_cycles.fetch_add(1, Ordering::Relaxed);
        self.state.set(SchedulerState::Waiting);
    }
}
