use ntopng_exporter_application::ports::DiagnosticSink;
use ntopng_exporter_domain::ScrapeDiagnostic;
use tracing::warn;

/// Reports scrape anomalies as structured `warn` events.
#[derive(Debug, Default)]
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&self, diagnostic: ScrapeDiagnostic) {
        match &diagnostic {
            ScrapeDiagnostic::DuplicateHost {
                address,
                kept_interface_id,
                discarded_interface_id,
            } => warn!(
                address = %address,
                kept_interface_id,
                discarded_interface_id,
                "Host reported on more than one interface, keeping first report"
            ),
            ScrapeDiagnostic::InterfaceResolutionFallback {
                address,
                interface_id,
            } => warn!(
                address = %address,
                interface_id,
                "Could not resolve interface id, falling back to numeric name"
            ),
        }
    }
}
