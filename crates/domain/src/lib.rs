//! ntopng-exporter domain layer
pub mod config;
pub mod errors;
pub mod host;
pub mod interface;
pub mod scrape_diagnostic;
pub mod subnet_allow_list;

pub use config::{AuthMethod, CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use host::{Host, HostSnapshot};
pub use interface::{InterfaceTable, NetworkInterface};
pub use scrape_diagnostic::ScrapeDiagnostic;
pub use subnet_allow_list::SubnetAllowList;
