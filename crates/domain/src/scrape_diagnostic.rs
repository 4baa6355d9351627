use std::fmt;
use std::sync::Arc;

/// Non-fatal anomalies noticed while building a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeDiagnostic {
    /// The same address was reported by two interfaces; the first report was kept.
    DuplicateHost {
        address: Arc<str>,
        kept_interface_id: i64,
        discarded_interface_id: i64,
    },
    /// A host carried an interface id missing from the interface table.
    InterfaceResolutionFallback {
        address: Arc<str>,
        interface_id: i64,
    },
}

impl fmt::Display for ScrapeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeDiagnostic::DuplicateHost {
                address,
                kept_interface_id,
                discarded_interface_id,
            } => write!(
                f,
                "host {} already seen on interface {}, ignoring report from interface {}",
                address, kept_interface_id, discarded_interface_id
            ),
            ScrapeDiagnostic::InterfaceResolutionFallback {
                address,
                interface_id,
            } => write!(
                f,
                "could not resolve interface {} for host {}, using numeric id",
                interface_id, address
            ),
        }
    }
}
