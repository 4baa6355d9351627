use async_trait::async_trait;
use ntopng_exporter_domain::{DomainError, Host, NetworkInterface};

/// Read access to the ntopng REST API.
///
/// Implementations perform one request per call and only decode the
/// payload; emptiness and configuration checks belong to the use cases.
#[async_trait]
pub trait ApplianceGateway: Send + Sync {
    async fn list_interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError>;

    async fn list_hosts(&self, interface_id: i64) -> Result<Vec<Host>, DomainError>;
}
