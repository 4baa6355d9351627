use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HostConfig {
    /// Interface names as ntopng reports them; scraped in this order.
    #[serde(default)]
    pub interfaces_to_monitor: Vec<String>,
}
