use crate::DomainError;
use ipnetwork::IpNetwork;
use std::net::IpAddr;

/// Subnets a host address must fall into to be published.
///
/// An empty list lets every address through.
#[derive(Debug, Clone, Default)]
pub struct SubnetAllowList {
    networks: Vec<IpNetwork>,
}

impl SubnetAllowList {
    pub fn new<S: AsRef<str>>(cidrs: &[S]) -> Result<Self, DomainError> {
        let mut networks = Vec::with_capacity(cidrs.len());

        for cidr in cidrs {
            let cidr = cidr.as_ref().trim();
            let network: IpNetwork = cidr
                .parse()
                .map_err(|e| DomainError::InvalidCidr(format!("{}: {}", cidr, e)))?;
            networks.push(network);
        }

        Ok(Self { networks })
    }

    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn contains(&self, ip: IpAddr) -> bool {
        self.networks.iter().any(|network| network.contains(ip))
    }

    /// Addresses that do not parse as IPs only pass when no subnets are configured.
    pub fn permits(&self, address: &str) -> bool {
        if self.networks.is_empty() {
            return true;
        }

        match address.parse::<IpAddr>() {
            Ok(ip) => self.contains(ip),
            Err(_) => false,
        }
    }
}
