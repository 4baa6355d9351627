use super::Adapters;
use ntopng_exporter_application::use_cases::{
    BuildSnapshotUseCase, ResolveInterfacesUseCase, ScrapeInterfaceUseCase,
};
use ntopng_exporter_domain::{Config, SubnetAllowList};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_interfaces: Arc<ResolveInterfacesUseCase>,
    pub build_snapshot: Arc<BuildSnapshotUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters) -> anyhow::Result<Self> {
        let monitored = config.host.interfaces_to_monitor.clone();
        let allow_list = SubnetAllowList::new(config.metric.local_subnets_only.as_slice())?;

        let resolve_interfaces = Arc::new(ResolveInterfacesUseCase::new(
            adapters.gateway.clone(),
            adapters.interfaces.clone(),
            monitored.clone(),
        ));

        let scraper = Arc::new(ScrapeInterfaceUseCase::new(adapters.gateway.clone()));
        let build_snapshot = Arc::new(
            BuildSnapshotUseCase::new(
                scraper,
                adapters.interfaces.clone(),
                adapters.snapshots.clone(),
                adapters.diagnostics.clone(),
                monitored,
            )
            .with_allow_list(allow_list),
        );

        Ok(Self {
            resolve_interfaces,
            build_snapshot,
        })
    }
}
