use super::ScrapeInterfaceUseCase;
use crate::ports::DiagnosticSink;
use crate::services::{InterfaceCache, SnapshotStore};
use ntopng_exporter_domain::{
    DomainError, Host, HostSnapshot, InterfaceTable, ScrapeDiagnostic, SubnetAllowList,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Use case: run one scrape cycle over every monitored interface and
/// publish the result.
///
/// Interfaces are scraped one at a time in configuration order. The first
/// failing interface aborts the cycle and the previously published
/// snapshot stays in place.
pub struct BuildSnapshotUseCase {
    scraper: Arc<ScrapeInterfaceUseCase>,
    interfaces: Arc<InterfaceCache>,
    store: Arc<SnapshotStore>,
    diagnostics: Arc<dyn DiagnosticSink>,
    monitored: Vec<String>,
    allow_list: SubnetAllowList,
}

impl BuildSnapshotUseCase {
    pub fn new(
        scraper: Arc<ScrapeInterfaceUseCase>,
        interfaces: Arc<InterfaceCache>,
        store: Arc<SnapshotStore>,
        diagnostics: Arc<dyn DiagnosticSink>,
        monitored: Vec<String>,
    ) -> Self {
        Self {
            scraper,
            interfaces,
            store,
            diagnostics,
            monitored,
            allow_list: SubnetAllowList::allow_all(),
        }
    }

    pub fn with_allow_list(mut self, allow_list: SubnetAllowList) -> Self {
        self.allow_list = allow_list;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Arc<HostSnapshot>, DomainError> {
        let table = self
            .interfaces
            .current()
            .ok_or(DomainError::InterfacesNotResolved)?;

        // Built off to the side so a failed cycle never touches the published snapshot.
        let mut pending: HashMap<Arc<str>, Host> = HashMap::new();

        for name in &self.monitored {
            let Some(interface_id) = table.id_of(name) else {
                return Err(DomainError::ConfigMismatch {
                    interface: name.clone(),
                    available: table.names(),
                });
            };

            let hosts = match self.scraper.execute(interface_id).await {
                Ok(hosts) => hosts,
                Err(e) => {
                    return Err(DomainError::InterfaceScrape {
                        interface: name.clone(),
                        source: Box::new(e),
                    });
                }
            };

            let before = pending.len();
            for host in hosts {
                self.absorb(&mut pending, &table, host);
            }
            debug!(
                interface = %name,
                interface_id,
                added = pending.len() - before,
                "Interface merged into pending snapshot"
            );
        }

        let snapshot = self
            .store
            .publish(HostSnapshot::new(pending, self.monitored.len()));

        info!(
            hosts = snapshot.len(),
            interfaces = snapshot.interface_count(),
            "Host snapshot published"
        );
        Ok(snapshot)
    }

    fn absorb(
        &self,
        pending: &mut HashMap<Arc<str>, Host>,
        table: &InterfaceTable,
        mut host: Host,
    ) {
        if let Some(existing) = pending.get(&host.address) {
            if existing.interface_id != host.interface_id {
                self.diagnostics.report(ScrapeDiagnostic::DuplicateHost {
                    address: Arc::clone(&host.address),
                    kept_interface_id: existing.interface_id,
                    discarded_interface_id: host.interface_id,
                });
                return;
            }
        }

        if !self.allow_list.permits(&host.address) {
            return;
        }

        host.interface_name = match table.name_of(host.interface_id) {
            Some(name) => name.to_string(),
            None => {
                self.diagnostics
                    .report(ScrapeDiagnostic::InterfaceResolutionFallback {
                        address: Arc::clone(&host.address),
                        interface_id: host.interface_id,
                    });
                host.interface_id.to_string()
            }
        };

        pending.insert(Arc::clone(&host.address), host);
    }
}
