use crate::ports::ApplianceGateway;
use crate::services::InterfaceCache;
use ntopng_exporter_domain::{DomainError, InterfaceTable};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Use case: map configured interface names to ntopng interface ids.
///
/// Must succeed once before any scrape cycle. The cached table is only
/// replaced when the whole resolution succeeds.
pub struct ResolveInterfacesUseCase {
    gateway: Arc<dyn ApplianceGateway>,
    cache: Arc<InterfaceCache>,
    required: Vec<String>,
}

impl ResolveInterfacesUseCase {
    pub fn new(
        gateway: Arc<dyn ApplianceGateway>,
        cache: Arc<InterfaceCache>,
        required: Vec<String>,
    ) -> Self {
        Self {
            gateway,
            cache,
            required,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Arc<InterfaceTable>, DomainError> {
        debug!("Requesting interface list from ntopng");

        let interfaces = self.gateway.list_interfaces().await?;
        if interfaces.is_empty() {
            return Err(DomainError::EmptyResult("interfaces".to_string()));
        }

        let table = InterfaceTable::from_interfaces(interfaces);

        for name in &self.required {
            if !table.contains(name) {
                return Err(DomainError::ConfigMismatch {
                    interface: name.clone(),
                    available: table.names(),
                });
            }
        }

        info!(
            interfaces = table.len(),
            monitored = self.required.len(),
            "Interface ids resolved"
        );
        Ok(self.cache.replace(table))
    }
}
