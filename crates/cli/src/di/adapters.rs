use ntopng_exporter_application::ports::{ApplianceGateway, DiagnosticSink};
use ntopng_exporter_application::services::{InterfaceCache, SnapshotStore};
use ntopng_exporter_domain::Config;
use ntopng_exporter_infrastructure::diagnostics::TracingDiagnosticSink;
use ntopng_exporter_infrastructure::ntopng::NtopngClient;
use std::sync::Arc;
use tracing::info;

/// Outbound adapters and the shared in-memory state they feed.
pub struct Adapters {
    pub gateway: Arc<dyn ApplianceGateway>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
    pub interfaces: Arc<InterfaceCache>,
    pub snapshots: Arc<SnapshotStore>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = NtopngClient::from_config(&config.ntopng)?;
        info!(
            endpoint = %config.ntopng.endpoint,
            auth = ?config.ntopng.auth_method,
            "ntopng client ready"
        );

        Ok(Self {
            gateway: Arc::new(client),
            diagnostics: Arc::new(TracingDiagnosticSink::new()),
            interfaces: Arc::new(InterfaceCache::new()),
            snapshots: Arc::new(SnapshotStore::new()),
        })
    }
}
