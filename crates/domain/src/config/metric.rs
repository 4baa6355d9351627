use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetricConfig {
    /// CIDR allow-list; hosts outside every subnet are dropped. Empty keeps all hosts.
    #[serde(default)]
    pub local_subnets_only: Vec<String>,
}
