use serde_json::Value;
use thiserror::Error;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// A credential token cannot be sent as an HTTP header value.
    #[error("invalid value for header '{0}'")]
    InvalidHeaderValue(&'static str),

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Body could not be encoded or decoded as JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status with response payload.
    #[error("server returned status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ClientError {
    /// Returns the HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(error) => error.status(),
            _ => None,
        }
    }

    /// Returns the provider error description carried in a failed response.
    ///
    /// e-conomic reports OAuth-style failures under `error_description` and
    /// validation failures under `message`.
    pub fn error_description(&self) -> Option<String> {
        match self {
            Self::HttpStatus { body, .. } => describe_body(body),
            _ => None,
        }
    }
}

pub(crate) fn describe_body(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    ["error_description", "message"]
        .iter()
        .find_map(|key| parsed.get(key).and_then(Value::as_str))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::ClientError;

    fn http_status(body: &str) -> ClientError {
        ClientError::HttpStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            body: body.to_owned(),
        }
    }

    #[test]
    fn prefers_error_description_over_message() {
        let error = http_status(r#"{"error_description":"no grant","message":"other"}"#);
        assert_eq!(error.error_description().as_deref(), Some("no grant"));
        assert_eq!(error.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }

    #[test]
    fn falls_back_to_message() {
        let error = http_status(r#"{"message":"Customer not found."}"#);
        assert_eq!(
            error.error_description().as_deref(),
            Some("Customer not found.")
        );
    }

    #[test]
    fn non_json_body_has_no_description() {
        assert_eq!(http_status("<html>gateway</html>").error_description(), None);
        assert_eq!(ClientError::InvalidPath("x".into()).status(), None);
    }
}
