use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request to {endpoint} was not successful. Status: {status}, Response: {body}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("ntopng returned 0 {0}")]
    EmptyResult(String),

    #[error("Could not find '{interface}' interface in list returned by ntopng: {available:?}")]
    ConfigMismatch {
        interface: String,
        available: Vec<String>,
    },

    #[error("Interface ids have not been resolved yet")]
    InterfacesNotResolved,

    #[error("Failed to scrape interface '{interface}': {source}")]
    InterfaceScrape {
        interface: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Was not able to parse duration '{value}': {reason}")]
    IntervalParse { value: String, reason: String },

    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),
}

impl DomainError {
    /// True for failures of the HTTP round trip itself, status included.
    pub fn is_transport(&self) -> bool {
        match self {
            DomainError::Transport(_) | DomainError::UnexpectedStatus { .. } => true,
            DomainError::InterfaceScrape { source, .. } => source.is_transport(),
            _ => false,
        }
    }
}
