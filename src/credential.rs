use std::fmt;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::ClientError;

/// Header carrying the application's secret token.
pub const APP_SECRET_TOKEN: HeaderName = HeaderName::from_static("x-appsecrettoken");
/// Header carrying the agreement grant token.
pub const AGREEMENT_GRANT_TOKEN: HeaderName = HeaderName::from_static("x-agreementgranttoken");

/// Environment variable read by [`Credential::from_env`] for the secret token.
pub const SECRET_TOKEN_ENV: &str = "ECONOMIC_SECRET_TOKEN";
/// Environment variable read by [`Credential::from_env`] for the grant token.
pub const GRANT_TOKEN_ENV: &str = "ECONOMIC_GRANT_TOKEN";

/// Secret/grant token pair used to authenticate against e-conomic.
///
/// Both tokens are optional; each one is only sent when present. Start from
/// [`Credential::default`] to supply only one of them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    secret_token: Option<String>,
    grant_token: Option<String>,
}

impl Credential {
    /// Creates a credential carrying both tokens.
    pub fn new(secret_token: impl Into<String>, grant_token: impl Into<String>) -> Self {
        Self {
            secret_token: Some(secret_token.into()),
            grant_token: Some(grant_token.into()),
        }
    }

    #[must_use]
    pub fn with_secret_token(mut self, token: impl Into<String>) -> Self {
        self.secret_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_grant_token(mut self, token: impl Into<String>) -> Self {
        self.grant_token = Some(token.into());
        self
    }

    /// Reads both tokens from `ECONOMIC_SECRET_TOKEN` and `ECONOMIC_GRANT_TOKEN`.
    pub fn from_env() -> Self {
        Self {
            secret_token: std::env::var(SECRET_TOKEN_ENV).ok(),
            grant_token: std::env::var(GRANT_TOKEN_ENV).ok(),
        }
    }

    pub fn secret_token(&self) -> Option<&str> {
        self.secret_token.as_deref()
    }

    pub fn grant_token(&self) -> Option<&str> {
        self.grant_token.as_deref()
    }

    /// Builds the header map sent with every request.
    ///
    /// Always contains `Content-Type: application/json`. Each token header is
    /// present iff the corresponding token was supplied.
    pub fn headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.secret_token {
            headers.insert(APP_SECRET_TOKEN, sensitive(token, "X-AppSecretToken")?);
        }
        if let Some(token) = &self.grant_token {
            headers.insert(AGREEMENT_GRANT_TOKEN, sensitive(token, "X-AgreementGrantToken")?);
        }

        Ok(headers)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |token: &Option<String>| token.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credential")
            .field("secret_token", &redact(&self.secret_token))
            .field("grant_token", &redact(&self.grant_token))
            .finish()
    }
}

fn sensitive(token: &str, name: &'static str) -> Result<HeaderValue, ClientError> {
    let mut value =
        HeaderValue::from_str(token).map_err(|_| ClientError::InvalidHeaderValue(name))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::Credential;
    use crate::ClientError;

    fn credential(secret: Option<&str>, grant: Option<&str>) -> Credential {
        let mut credential = Credential::default();
        if let Some(token) = secret {
            credential = credential.with_secret_token(token);
        }
        if let Some(token) = grant {
            credential = credential.with_grant_token(token);
        }
        credential
    }

    #[test]
    fn secret_only_omits_grant_header() {
        let headers = credential(Some("s"), None).headers().expect("valid headers");
        assert_eq!(headers["X-AppSecretToken"], "s");
        assert!(headers.get("X-AgreementGrantToken").is_none());
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn grant_only_omits_secret_header() {
        let headers = credential(None, Some("g")).headers().expect("valid headers");
        assert!(headers.get("X-AppSecretToken").is_none());
        assert_eq!(headers["X-AgreementGrantToken"], "g");
    }

    #[test]
    fn both_tokens_present() {
        let headers = Credential::new("a", "b").headers().expect("valid headers");
        assert_eq!(headers["X-AppSecretToken"], "a");
        assert_eq!(headers["X-AgreementGrantToken"], "b");
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn no_tokens_only_content_type() {
        let headers = Credential::default().headers().expect("valid headers");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn rejects_token_with_newline() {
        let error = credential(Some("bad\ntoken"), None)
            .headers()
            .expect_err("newline is not a valid header value");
        assert!(matches!(error, ClientError::InvalidHeaderValue("X-AppSecretToken")));
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let rendered = format!("{:?}", credential(Some("top-secret"), None));
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
