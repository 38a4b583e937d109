//! REST client error type.
//!
//! ERROR HANDLING
//! ==============
//! Failures are surfaced to callers as-is; nothing here retries. A non-2xx
//! response is an error (`Status`) so callers see the same outcome a rejected
//! request would produce, with the raw body kept for display.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline, body build).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Called outside the browser, where no HTTP transport exists.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status code, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    /// Message suitable for inline display next to a form.
    ///
    /// Django REST Framework reports validation failures as a JSON object of
    /// field -> messages; those are flattened into one line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body, status } => {
                flatten_error_body(body).unwrap_or_else(|| format!("Request failed ({status})"))
            }
            other => other.to_string(),
        }
    }
}

fn flatten_error_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    let mut parts = Vec::new();
    for (field, messages) in object {
        let text = match messages {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            _ => continue,
        };
        if text.is_empty() {
            continue;
        }
        if field == "detail" || field == "non_field_errors" {
            parts.push(text);
        } else {
            parts.push(format!("{field}: {text}"));
        }
    }
    if parts.is_empty() { None } else { Some(parts.join("; ")) }
}
