use ntopng_exporter_domain::{AuthMethod, DomainError};
use reqwest::header::COOKIE;
use reqwest::{RequestBuilder, StatusCode};
use tracing::debug;

/// Longest response excerpt carried in an error message.
const MAX_ERROR_BODY_LEN: usize = 512;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub method: AuthMethod,
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn none() -> Self {
        Self {
            method: AuthMethod::None,
            user: String::new(),
            password: String::new(),
        }
    }

    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self.method {
            AuthMethod::Cookie => request.header(
                COOKIE,
                format!("user={}; password={}", self.user, self.password),
            ),
            AuthMethod::Basic => request.basic_auth(&self.user, Some(&self.password)),
            AuthMethod::None => request,
        }
    }
}

/// Performs one round trip and returns the body of a `200 OK` response.
///
/// Send failures, timeouts and any other status are transport errors.
pub async fn execute_request(
    request: RequestBuilder,
    endpoint: &str,
) -> Result<Vec<u8>, DomainError> {
    let response = request
        .send()
        .await
        .map_err(|e| DomainError::Transport(format!("request to {} failed: {}", endpoint, e)))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| DomainError::Transport(format!("read error for {}: {}", endpoint, e)))?;

    debug!(
        endpoint,
        status = status.as_u16(),
        bytes = body.len(),
        "ntopng response received"
    );

    if status != StatusCode::OK {
        return Err(DomainError::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body: excerpt(&body),
        });
    }

    Ok(body.to_vec())
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_ERROR_BODY_LEN {
        return text.into_owned();
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
