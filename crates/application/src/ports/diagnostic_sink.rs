use ntopng_exporter_domain::ScrapeDiagnostic;

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: ScrapeDiagnostic);
}
