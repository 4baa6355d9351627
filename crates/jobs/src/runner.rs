use crate::{HostScrapeJob, InterfaceRefreshJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(HostScrapeJob);
impl_spawnable_job!(InterfaceRefreshJob);

fn spawn_job<J: SpawnableJob>(
    job: Option<J>,
    shutdown: &CancellationToken,
) -> Option<JoinHandle<()>> {
    job.map(|job| Arc::new(job.with_cancellation(shutdown.clone())).start_job())
}

pub struct JobRunner {
    host_scrape: Option<HostScrapeJob>,
    interface_refresh: Option<InterfaceRefreshJob>,
    shutdown: CancellationToken,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            host_scrape: None,
            interface_refresh: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_host_scrape(mut self, job: HostScrapeJob) -> Self {
        self.host_scrape = Some(job);
        self
    }

    pub fn with_interface_refresh(mut self, job: InterfaceRefreshJob) -> Self {
        self.interface_refresh = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self) -> RunningJobs {
        info!("Starting background job runner");

        let handles: Vec<JoinHandle<()>> = [
            spawn_job(self.host_scrape, &self.shutdown),
            spawn_job(self.interface_refresh, &self.shutdown),
        ]
        .into_iter()
        .flatten()
        .collect();

        info!(jobs = handles.len(), "All background jobs started");
        RunningJobs {
            handles,
            shutdown: self.shutdown,
        }
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles to the spawned jobs, used to stop them and wait for them to exit.
pub struct RunningJobs {
    handles: Vec<JoinHandle<()>>,
    shutdown: CancellationToken,
}

impl RunningJobs {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancels every job and waits for in-flight cycles to finish.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Background job ended abnormally");
            }
        }
        info!("All background jobs stopped");
    }
}
