use super::envelope::decode_payload;
use super::transport::{execute_request, Credentials};
use super::wire::{HostDto, InterfaceDto, HOST_CUSTOM_FIELDS};
use async_trait::async_trait;
use ntopng_exporter_application::ports::ApplianceGateway;
use ntopng_exporter_domain::config::NtopngConfig;
use ntopng_exporter_domain::{DomainError, Host, NetworkInterface};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const LUA_REST_V1_GET: &str = "/lua/rest/v1/get";
const INTERFACES_PATH: &str = "/ntopng/interfaces.lua";
const HOST_CUSTOM_DATA_PATH: &str = "/host/custom_data.lua";

/// HTTP client for the ntopng REST v1 API.
pub struct NtopngClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl NtopngClient {
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        request_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ntopng-exporter/", env!("CARGO_PKG_VERSION")))
            .timeout(request_timeout)
            .build()
            .map_err(|e| DomainError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn from_config(config: &NtopngConfig) -> Result<Self, DomainError> {
        let credentials = Credentials {
            method: config.auth_method,
            user: config.user.clone(),
            password: config.password.clone(),
        };
        Self::new(&config.endpoint, credentials, config.request_timeout()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, LUA_REST_V1_GET, path)
    }
}

#[async_trait]
impl ApplianceGateway for NtopngClient {
    async fn list_interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError> {
        let url = self.url(INTERFACES_PATH);
        debug!(url = %url, "Fetching ntopng interfaces");

        let request = self.credentials.apply(self.http.get(&url));
        let body = execute_request(request, &url).await?;

        let interfaces: Vec<InterfaceDto> = decode_payload(&body, "interface list")?;
        Ok(interfaces.into_iter().map(NetworkInterface::from).collect())
    }

    async fn list_hosts(&self, interface_id: i64) -> Result<Vec<Host>, DomainError> {
        let url = self.url(HOST_CUSTOM_DATA_PATH);
        debug!(url = %url, interface_id, "Fetching ntopng hosts");

        // ntopng only accepts the field selection as a POST body.
        let payload = json!({
            "ifid": interface_id,
            "field_alias": HOST_CUSTOM_FIELDS,
        });
        let request = self.credentials.apply(self.http.post(&url).json(&payload));
        let body = execute_request(request, &url).await?;

        let hosts: Vec<HostDto> = decode_payload(&body, "host list")?;
        Ok(hosts.into_iter().map(Host::from).collect())
    }
}
