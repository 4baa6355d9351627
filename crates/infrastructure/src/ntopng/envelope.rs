//! ntopng REST v1 response envelope
//!
//! Every endpoint answers with the same wrapper:
//! ```text
//! { "rc": 0, "rc_str": "OK", "rc_str_hr": "Success", "rsp": <payload> }
//! ```
//! A non-zero `rc` means the request was understood but rejected.

use ntopng_exporter_domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    rc: i64,
    #[serde(default)]
    rc_str: Option<String>,
    #[serde(default)]
    rc_str_hr: Option<String>,
    rsp: Option<Value>,
}

/// Strips the envelope and returns the raw `rsp` payload.
pub fn unwrap_envelope(body: &[u8]) -> Result<Value, DomainError> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|e| DomainError::Decode(format!("malformed ntopng response: {}", e)))?;

    if envelope.rc != 0 {
        let reason = envelope
            .rc_str_hr
            .or(envelope.rc_str)
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(DomainError::Decode(format!(
            "ntopng returned rc {}: {}",
            envelope.rc, reason
        )));
    }

    match envelope.rsp {
        Some(Value::Null) | None => Err(DomainError::Decode(
            "ntopng response has no 'rsp' payload".to_string(),
        )),
        Some(payload) => Ok(payload),
    }
}

/// Unwraps the envelope and decodes its payload.
pub fn decode_payload<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T, DomainError> {
    let payload = unwrap_envelope(body)?;
    serde_json::from_value(payload).map_err(|e| {
        DomainError::Decode(format!("was not able to parse {} from ntopng: {}", what, e))
    })
}
