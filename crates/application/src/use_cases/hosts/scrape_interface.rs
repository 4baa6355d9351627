use crate::ports::ApplianceGateway;
use ntopng_exporter_domain::{DomainError, Host};
use std::sync::Arc;
use tracing::debug;

/// Use case: fetch every host ntopng knows on one interface.
pub struct ScrapeInterfaceUseCase {
    gateway: Arc<dyn ApplianceGateway>,
}

impl ScrapeInterfaceUseCase {
    pub fn new(gateway: Arc<dyn ApplianceGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, interface_id: i64) -> Result<Vec<Host>, DomainError> {
        let hosts = self.gateway.list_hosts(interface_id).await?;
        if hosts.is_empty() {
            return Err(DomainError::EmptyResult(format!(
                "hosts for interface {}",
                interface_id
            )));
        }

        debug!(interface_id, hosts = hosts.len(), "Interface scraped");
        Ok(hosts)
    }
}
