use ntopng_exporter_application::use_cases::ResolveInterfacesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background job that re-resolves interface ids so renumbering on the
/// appliance is picked up without a restart.
///
/// A failed resolution keeps the previous interface table.
pub struct InterfaceRefreshJob {
    resolve_interfaces: Arc<ResolveInterfacesUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl InterfaceRefreshJob {
    pub fn new(resolve_interfaces: Arc<ResolveInterfacesUseCase>, interval: Duration) -> Self {
        Self {
            resolve_interfaces,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval = ?self.interval, "Starting interface refresh job");

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => {
                    info!("InterfaceRefreshJob: shutting down");
                    break;
                }
                _ = interval.tick() => self.refresh().await,
            }
        }
    }

    async fn refresh(&self) {
        match self.resolve_interfaces.execute().await {
            Ok(table) => {
                info!(
                    interfaces = table.len(),
                    "InterfaceRefreshJob: interface ids refreshed"
                );
            }
            Err(e) => {
                error!(
                    error = %e,
                    "InterfaceRefreshJob: refresh failed, keeping previous ids"
                );
            }
        }
    }
}
