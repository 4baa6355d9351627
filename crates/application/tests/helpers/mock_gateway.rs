#![allow(dead_code)]

use async_trait::async_trait;
use ntopng_exporter_application::ports::{ApplianceGateway, DiagnosticSink};
use ntopng_exporter_domain::{DomainError, Host, NetworkInterface, ScrapeDiagnostic};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub fn make_host(address: &str, interface_id: i64) -> Host {
    let mut host = Host::new(address, interface_id);
    host.bytes_sent = 1_000;
    host.bytes_received = 2_000;
    host.num_alerts = 1;
    host.mac_address = "aa:bb:cc:dd:ee:ff".to_string();
    host
}

pub fn interfaces(pairs: &[(&str, i64)]) -> Vec<NetworkInterface> {
    pairs
        .iter()
        .map(|(name, id)| NetworkInterface::new(*name, *id))
        .collect()
}

pub struct MockApplianceGateway {
    interfaces: Arc<RwLock<Vec<NetworkInterface>>>,
    interface_failure: Arc<RwLock<Option<DomainError>>>,
    hosts: Arc<RwLock<HashMap<i64, Vec<Host>>>>,
    host_failures: Arc<RwLock<HashMap<i64, DomainError>>>,
    requested_ids: Arc<RwLock<Vec<i64>>>,
    interface_calls: Arc<AtomicU64>,
    host_calls: Arc<AtomicU64>,
}

impl MockApplianceGateway {
    pub fn new() -> Self {
        Self {
            interfaces: Arc::new(RwLock::new(Vec::new())),
            interface_failure: Arc::new(RwLock::new(None)),
            hosts: Arc::new(RwLock::new(HashMap::new())),
            host_failures: Arc::new(RwLock::new(HashMap::new())),
            requested_ids: Arc::new(RwLock::new(Vec::new())),
            interface_calls: Arc::new(AtomicU64::new(0)),
            host_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn with_interfaces(pairs: &[(&str, i64)]) -> Self {
        let gateway = Self::new();
        gateway.set_interfaces(pairs).await;
        gateway
    }

    pub async fn set_interfaces(&self, pairs: &[(&str, i64)]) {
        *self.interfaces.write().await = interfaces(pairs);
    }

    pub async fn set_interface_failure(&self, error: Option<DomainError>) {
        *self.interface_failure.write().await = error;
    }

    pub async fn set_hosts(&self, interface_id: i64, hosts: Vec<Host>) {
        self.hosts.write().await.insert(interface_id, hosts);
    }

    pub async fn fail_hosts(&self, interface_id: i64, error: DomainError) {
        self.host_failures.write().await.insert(interface_id, error);
    }

    pub async fn clear_host_failures(&self) {
        self.host_failures.write().await.clear();
    }

    pub async fn requested_ids(&self) -> Vec<i64> {
        self.requested_ids.read().await.clone()
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
        if let Some(error) = self.interface_failure.read().await.clone() {
            return Err(error);
        }
        Ok(self.interfaces.read().await.clone())
    }

    async fn list_hosts(&self, interface_id: i64) -> Result<Vec<Host>, DomainError> {
        self.host_calls.fetch_add(1, Ordering::Relaxed);
        self.requested_ids.write().await.push(interface_id);
        if let Some(error) = self.host_failures.read().await.get(&interface_id) {
            return Err(error.clone());
        }
        Ok(self
            .hosts
            .read()
            .await
            .get(&interface_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct RecordingDiagnosticSink {
    reports: Mutex<Vec<ScrapeDiagnostic>>,
}

impl RecordingDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<ScrapeDiagnostic> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingDiagnosticSink {
    fn report(&self, diagnostic: ScrapeDiagnostic) {
        self.reports.lock().unwrap().push(diagnostic);
    }
}
