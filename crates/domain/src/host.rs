use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::SystemTime;

/// Traffic and alert counters ntopng reports for one host address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    pub address: Arc<str>,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub active_flows_as_client: u64,
    pub active_flows_as_server: u64,
    pub dns_name: String,
    pub num_alerts: u64,
    pub mac_address: String,
    pub total_flows_as_client: u64,
    pub total_flows_as_server: u64,
    pub vlan: i64,
    pub total_alerts: u64,
    pub name: String,
    pub interface_id: i64,
    /// Filled in from the interface table while building a snapshot.
    pub interface_name: String,
}

impl Host {
    pub fn new(address: impl Into<Arc<str>>, interface_id: i64) -> Self {
        Self {
            address: address.into(),
            interface_id,
            ..Default::default()
        }
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.address.parse().ok()
    }
}

/// The hosts published after one complete scrape cycle, keyed by address.
#[derive(Debug, Clone)]
pub struct HostSnapshot {
    hosts: HashMap<Arc<str>, Host>,
    interface_count: usize,
    built_at: SystemTime,
}

impl HostSnapshot {
    pub fn new(hosts: HashMap<Arc<str>, Host>, interface_count: usize) -> Self {
        Self {
            hosts,
            interface_count,
            built_at: SystemTime::now(),
        }
    }

    pub fn get(&self, address: &str) -> Option<&Host> {
        self.hosts.get(address)
    }

    pub fn hosts(&self) -> &HashMap<Arc<str>, Host> {
        &self.hosts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Host> {
        self.hosts.values()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn interface_count(&self) -> usize {
        self.interface_count
    }

    pub fn built_at(&self) -> SystemTime {
        self.built_at
    }
}
