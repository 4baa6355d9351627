#![allow(dead_code)]

use async_trait::async_trait;
use ntopng_exporter_application::ports::{ApplianceGateway, DiagnosticSink};
use ntopng_exporter_application::services::{InterfaceCache, SnapshotStore};
use ntopng_exporter_application::use_cases::{
    BuildSnapshotUseCase, ResolveInterfacesUseCase, ScrapeInterfaceUseCase,
};
use ntopng_exporter_domain::{DomainError, Host, NetworkInterface, ScrapeDiagnostic};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub struct MockApplianceGateway {
    interfaces: Arc<RwLock<Vec<NetworkInterface>>>,
    hosts: Arc<RwLock<Vec<Host>>>,
    host_delay: Arc<RwLock<Option<Duration>>>,
    interface_delay: Arc<RwLock<Option<Duration>>>,
    interface_spans: Arc<Mutex<Vec<(Instant, Instant)>>>,
    should_fail: Arc<AtomicBool>,
    interface_calls: Arc<AtomicU64>,
    host_calls: Arc<AtomicU64>,
}

impl MockApplianceGateway {
    /// One interface `eth0` (id 1) reporting a single host.
    pub fn new() -> Self {
        Self {
            interfaces: Arc::new(RwLock::new(vec![NetworkInterface::new("eth0", 1)])),
            hosts: Arc::new(RwLock::new(vec![Host::new("10.0.0.1", 1)])),
            host_delay: Arc::new(RwLock::new(None)),
            interface_delay: Arc::new(RwLock::new(None)),
            interface_spans: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
            interface_calls: Arc::new(AtomicU64::new(0)),
            host_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_interfaces(&self, interfaces: Vec<NetworkInterface>) {
        *self.interfaces.write().await = interfaces;
    }

    pub async fn set_hosts(&self, hosts: Vec<Host>) {
        *self.hosts.write().await = hosts;
    }

    pub async fn set_host_delay(&self, delay: Duration) {
        *self.host_delay.write().await = Some(delay);
    }

    pub async fn set_interface_delay(&self, delay: Duration) {
        *self.interface_delay.write().await = Some(delay);
    }

    /// Start and end instants of every `list_interfaces` call, in call order.
    pub fn interface_call_spans(&self) -> Vec<(Instant, Instant)> {
        self.interface_spans.lock().unwrap().clone()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn interface_call_count(&self) -> u64 {
        self.interface_calls.load(Ordering::Relaxed)
    }

    pub fn host_call_count(&self) -> u64 {
        self.host_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ApplianceGateway for MockApplianceGateway {
    async fn list_interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError> {
        self.interface_calls.fetch_add(1, Ordering::Relaxed);
        let started = Instant::now();
        let delay = *self.interface_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.interface_spans
            .lock()
            .unwrap()
            .push((started, Instant::now()));

        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::Transport("connection refused".to_string()));
        }
        Ok(self.interfaces.read().await.clone())
    }

    async fn list_hosts(&self, _interface_id: i64) -> Result<Vec<Host>, DomainError> {
        self.host_calls.fetch_add(1, Ordering::Relaxed);
        let delay = *self.host_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::UnexpectedStatus {
                endpoint: "/lua/rest/v1/get/host/custom_data.lua".to_string(),
                status: 503,
                body: String::new(),
            });
        }
        Ok(self.hosts.read().await.clone())
    }
}

pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn report(&self, _diagnostic: ScrapeDiagnostic) {}
}

pub struct Pipeline {
    pub gateway: Arc<MockApplianceGateway>,
    pub cache: Arc<InterfaceCache>,
    pub store: Arc<SnapshotStore>,
    pub resolve: Arc<ResolveInterfacesUseCase>,
    pub build: Arc<BuildSnapshotUseCase>,
}

/// Wires the use cases around a mock gateway, with interfaces already resolved.
pub async fn pipeline() -> Pipeline {
    let gateway = Arc::new(MockApplianceGateway::new());
    let cache = Arc::new(InterfaceCache::new());
    let store = Arc::new(SnapshotStore::new());
    let monitored = vec!["eth0".to_string()];

    let resolve = Arc::new(ResolveInterfacesUseCase::new(
        gateway.clone(),
        cache.clone(),
        monitored.clone(),
    ));
    resolve.execute().await.unwrap();

    let build = Arc::new(BuildSnapshotUseCase::new(
        Arc::new(ScrapeInterfaceUseCase::new(gateway.clone())),
        cache.clone(),
        store.clone(),
        Arc::new(NullDiagnosticSink),
        monitored,
    ));

    Pipeline {
        gateway,
        cache,
        store,
        resolve,
        build,
    }
}
