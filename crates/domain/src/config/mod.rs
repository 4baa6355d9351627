pub mod errors;
pub mod host;
pub mod logging;
pub mod metric;
pub mod ntopng;
pub mod root;

pub use errors::ConfigError;
pub use host::HostConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use metric::MetricConfig;
pub use ntopng::{parse_interval, AuthMethod, NtopngConfig};
pub use root::{CliOverrides, Config};
