use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::ClientError;
use crate::error::describe_body;

/// Payload attached to a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// JSON document, sent with the stored `Content-Type: application/json`.
    Json(Value),
    /// Single file sent as `multipart/form-data` under the `file` field.
    File(FileUpload),
}

/// File contents for a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// One outbound call: method, relative URL (path plus query), body and headers.
///
/// A descriptor is built fresh for every call and consumed by [`Transport::call`].
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<RequestBody>,
    pub headers: HeaderMap,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// What was actually sent, echoed back in the response envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestEcho {
    pub method: Method,
    pub url: Url,
}

/// Uniform envelope returned from every call, whichever API family served it.
#[derive(Clone, Debug)]
pub struct HttpResponse<T> {
    pub data: T,
    pub headers: HeaderMap,
    pub status: StatusCode,
    pub status_text: String,
    pub request: RequestEcho,
}

impl<T> HttpResponse<T> {
    fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<HttpResponse<U>, E> {
        Ok(HttpResponse {
            data: f(self.data)?,
            headers: self.headers,
            status: self.status,
            status_text: self.status_text,
            request: self.request,
        })
    }
}

/// Thin wrapper around a single `reqwest` call.
///
/// Holds no state between calls besides the pooled `reqwest::Client`.
#[derive(Clone, Debug, Default)]
pub struct Transport {
    http: reqwest::Client,
}

impl Transport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Issues `request` against `base_url` and decodes the body as JSON.
    ///
    /// An empty success body decodes as `null`. Non-success statuses return
    /// [`ClientError::HttpStatus`] with the raw body.
    pub async fn call<T: DeserializeOwned>(
        &self,
        base_url: &Url,
        request: HttpRequest,
    ) -> Result<HttpResponse<T>, ClientError> {
        self.call_bytes(base_url, request)
            .await?
            .try_map(|payload| decode_json(&payload))
    }

    /// Issues `request` against `base_url` and returns the raw body bytes.
    pub async fn call_bytes(
        &self,
        base_url: &Url,
        request: HttpRequest,
    ) -> Result<HttpResponse<Vec<u8>>, ClientError> {
        let url = build_url(base_url, &request.url)?;
        let HttpRequest {
            method,
            body,
            mut headers,
            ..
        } = request;

        debug!("{} {}", method, url);

        let mut builder = self.http.request(method.clone(), url.clone());
        match body {
            Some(RequestBody::Json(json)) => {
                builder = builder.headers(headers).body(serde_json::to_vec(&json)?);
            }
            Some(RequestBody::File(file)) => {
                // multipart sets its own content type with the boundary
                headers.remove(CONTENT_TYPE);
                let part = Part::bytes(file.bytes).file_name(file.file_name);
                builder = builder
                    .headers(headers)
                    .multipart(Form::new().part("file", part));
            }
            None => builder = builder.headers(headers),
        }

        let response = builder.send().await.map_err(|err| {
            error!("{} {} failed: {}", method, url, err);
            ClientError::Request(err)
        })?;

        let status = response.status();
        let response_headers = response.headers().clone();
        debug!("Response status: {}", status);
        let payload = response.bytes().await?.to_vec();

        if !status.is_success() {
            let body = String::from_utf8_lossy(&payload).into_owned();
            let description = describe_body(&body).unwrap_or_default();
            warn!("{} {} returned {}: {}", method, url, status, description);
            return Err(ClientError::HttpStatus { status, body });
        }

        Ok(HttpResponse {
            data: payload,
            headers: response_headers,
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            request: RequestEcho { method, url },
        })
    }
}

fn decode_json<T: DeserializeOwned>(payload: &[u8]) -> Result<T, ClientError> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        Ok(serde_json::from_value(Value::Null)?)
    } else {
        Ok(serde_json::from_slice(payload)?)
    }
}

pub(crate) fn build_url(base_url: &Url, path: &str) -> Result<Url, ClientError> {
    let relative = path.trim_start_matches('/');
    base_url
        .join(relative)
        .map_err(|_| ClientError::InvalidPath(path.to_owned()))
}

pub(crate) fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use reqwest::Url;
    use serde::de::IgnoredAny;
    use serde_json::Value;

    use super::{build_url, decode_json, ensure_trailing_slash};

    #[test]
    fn joins_paths_from_base_with_nested_prefix() {
        let base =
            ensure_trailing_slash(Url::parse("https://example.com/proxy").expect("valid url"));
        let resolved =
            build_url(&base, "/customers?skippages=0&pagesize=100").expect("valid path");
        assert_eq!(
            resolved.as_str(),
            "https://example.com/proxy/customers?skippages=0&pagesize=100"
        );
    }

    #[test]
    fn joins_open_paths_without_leading_slash() {
        let base =
            ensure_trailing_slash(Url::parse("https://apis.e-conomic.com").expect("valid url"));
        let resolved =
            build_url(&base, "api/v22.0.0/projectgroups?cursor=234").expect("valid path");
        assert_eq!(resolved.path(), "/api/v22.0.0/projectgroups");
        assert_eq!(resolved.query(), Some("cursor=234"));
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let value: Value = decode_json(b"  ").expect("empty decodes");
        assert_eq!(value, Value::Null);
        let _: IgnoredAny = decode_json(b"").expect("ignored accepts null");
        let unit: Option<u32> = decode_json(b"").expect("option accepts null");
        assert_eq!(unit, None);
    }
}
