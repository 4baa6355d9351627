//! JSON shapes returned by the ntopng REST API.
//!
//! Counters come out of Lua and are not always typed consistently across
//! ntopng releases (integers, floats such as `1024.0`, or numeric strings),
//! so numeric fields are decoded leniently.

use ntopng_exporter_domain::{Host, NetworkInterface};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;

/// Fields requested from `host/custom_data.lua`, in the order ntopng expects.
pub const HOST_CUSTOM_FIELDS: &str = "ip,bytes.sent,bytes.rcvd,active_flows.as_client,active_flows.as_server,dns,num_alerts,mac,total_flows.as_client,total_flows.as_server,vlan,total_alerts,name,ifid";

#[derive(Debug, Deserialize)]
pub struct InterfaceDto {
    #[serde(deserialize_with = "lenient_i64")]
    pub ifid: i64,
    pub ifname: String,
}

impl From<InterfaceDto> for NetworkInterface {
    fn from(dto: InterfaceDto) -> Self {
        NetworkInterface::new(dto.ifname, dto.ifid)
    }
}

#[derive(Debug, Deserialize)]
pub struct HostDto {
    pub ip: String,
    #[serde(rename = "bytes.sent", default, deserialize_with = "lenient_u64")]
    pub bytes_sent: u64,
    #[serde(rename = "bytes.rcvd", default, deserialize_with = "lenient_u64")]
    pub bytes_rcvd: u64,
    #[serde(
        rename = "active_flows.as_client",
        default,
        deserialize_with = "lenient_u64"
    )]
    pub active_flows_as_client: u64,
    #[serde(
        rename = "active_flows.as_server",
        default,
        deserialize_with = "lenient_u64"
    )]
    pub active_flows_as_server: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dns: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub num_alerts: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mac: String,
    #[serde(
        rename = "total_flows.as_client",
        default,
        deserialize_with = "lenient_u64"
    )]
    pub total_flows_as_client: u64,
    #[serde(
        rename = "total_flows.as_server",
        default,
        deserialize_with = "lenient_u64"
    )]
    pub total_flows_as_server: u64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub vlan: i64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_alerts: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub ifid: i64,
}

impl From<HostDto> for Host {
    fn from(dto: HostDto) -> Self {
        Host {
            address: Arc::from(dto.ip.as_str()),
            bytes_sent: dto.bytes_sent,
            bytes_received: dto.bytes_rcvd,
            active_flows_as_client: dto.active_flows_as_client,
            active_flows_as_server: dto.active_flows_as_server,
            dns_name: dto.dns,
            num_alerts: dto.num_alerts,
            mac_address: dto.mac,
            total_flows_as_client: dto.total_flows_as_client,
            total_flows_as_server: dto.total_flows_as_server,
            vlan: dto.vlan,
            total_alerts: dto.total_alerts,
            name: dto.name,
            interface_id: dto.ifid,
            interface_name: String::new(),
        }
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid integer: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(|f| f as i64)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {:?}", s))),
        other => Err(serde::de::Error::custom(format!(
            "expected integer, got {}",
            other
        ))),
    }
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    lenient_i64(deserializer).map(|n| n.max(0) as u64)
}

/// Non-string values (ntopng sometimes sends objects or `false`) decode as empty.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}
