//! Adapter for the ntopng REST v1 API.

pub mod client;
pub mod envelope;
pub mod transport;
pub mod wire;

pub use client::NtopngClient;
pub use envelope::unwrap_envelope;
pub use transport::{execute_request, Credentials};
