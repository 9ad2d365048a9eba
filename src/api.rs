use std::fmt;
use std::str::FromStr;

use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::form_urlencoded::byte_serialize;

use crate::http::{
    FileUpload, HttpRequest, HttpResponse, RequestBody, Transport, ensure_trailing_slash,
};
use crate::{ClientError, Credential};

/// Base URL of the legacy REST API family.
pub const REST_BASE_URL: &str = "https://restapi.e-conomic.com";
/// Base URL of the Open API family.
pub const OPEN_BASE_URL: &str = "https://apis.e-conomic.com";

/// The two upstream API surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// `restapi.e-conomic.com`, paged with `skippages`/`pagesize`.
    Rest,
    /// `apis.e-conomic.com`, versioned per product and paged by cursor.
    Open,
}

impl ApiFamily {
    /// Returns the fixed base URL for this family.
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Rest => REST_BASE_URL,
            Self::Open => OPEN_BASE_URL,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for ApiFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ApiFamily {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "rest" => Ok(Self::Rest),
            "open" => Ok(Self::Open),
            other => Err(format!("unknown API family '{other}', expected 'rest' or 'open'")),
        }
    }
}

/// Authenticated client for one API family.
///
/// Holds the header map derived from a [`Credential`] and forwards every call
/// to the shared [`Transport`]. Cloning is cheap; clones share the connection
/// pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    family: ApiFamily,
    base_url: Url,
    headers: HeaderMap,
    transport: Transport,
}

impl ApiClient {
    /// Creates a client for `family` authenticated with `credential`.
    pub fn new(family: ApiFamily, credential: &Credential) -> Result<Self, ClientError> {
        let base_url = Url::parse(family.base_url())
            .map_err(|_| ClientError::InvalidBaseUrl(family.base_url().to_owned()))?;

        Ok(Self {
            family,
            base_url: ensure_trailing_slash(base_url),
            headers: credential.headers()?,
            transport: Transport::default(),
        })
    }

    /// Creates a client for the REST family.
    pub fn rest(credential: &Credential) -> Result<Self, ClientError> {
        Self::new(ApiFamily::Rest, credential)
    }

    /// Creates a client for the Open family.
    pub fn open(credential: &Credential) -> Result<Self, ClientError> {
        Self::new(ApiFamily::Open, credential)
    }

    /// Returns a client that sends requests to `base_url` instead of the
    /// family's fixed URL.
    ///
    /// The URL is normalized to include a trailing slash, so relative endpoint
    /// paths join correctly.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url.as_ref())
            .map_err(|_| ClientError::InvalidBaseUrl(base_url.as_ref().to_owned()))?;
        self.base_url = ensure_trailing_slash(parsed);
        Ok(self)
    }

    /// Returns a client that uses `http` for its calls.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.transport = Transport::new(http);
        self
    }

    pub fn family(&self) -> ApiFamily {
        self.family
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Header map sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Sends a request with the stored headers and decodes the JSON response.
    ///
    /// `url` is relative to the family's base URL and may carry a query string.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: impl Into<String>,
        body: Option<RequestBody>,
    ) -> Result<HttpResponse<T>, ClientError> {
        let request = self.descriptor(method, url, body);
        self.transport.call(&self.base_url, request).await
    }

    /// Sends a `GET` request and returns the raw response body.
    pub async fn download(
        &self,
        url: impl Into<String>,
    ) -> Result<HttpResponse<Vec<u8>>, ClientError> {
        let request = self.descriptor(Method::GET, url, None);
        self.transport.call_bytes(&self.base_url, request).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        url: impl Into<String>,
    ) -> Result<HttpResponse<T>, ClientError> {
        self.request(Method::GET, url, None).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: impl Into<String>,
        body: &B,
    ) -> Result<HttpResponse<T>, ClientError> {
        self.request(Method::POST, url, Some(json_body(body)?)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: impl Into<String>,
        body: &B,
    ) -> Result<HttpResponse<T>, ClientError> {
        self.request(Method::PUT, url, Some(json_body(body)?)).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: impl Into<String>,
        body: &B,
    ) -> Result<HttpResponse<T>, ClientError> {
        self.request(Method::PATCH, url, Some(json_body(body)?)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        url: impl Into<String>,
    ) -> Result<HttpResponse<T>, ClientError> {
        self.request(Method::DELETE, url, None).await
    }

    /// Sends `file` as a multipart upload with the given method.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        method: Method,
        url: impl Into<String>,
        file: FileUpload,
    ) -> Result<HttpResponse<T>, ClientError> {
        self.request(method, url, Some(RequestBody::File(file))).await
    }

    fn descriptor(
        &self,
        method: Method,
        url: impl Into<String>,
        body: Option<RequestBody>,
    ) -> HttpRequest {
        let request = HttpRequest::new(method, url).with_headers(self.headers.clone());
        match body {
            Some(body) => request.with_body(body),
            None => request,
        }
    }
}

/// Percent-encodes a value for use as a single path segment.
///
/// `.` and `..` are rejected: URL resolution treats them, escaped or not, as
/// directory steps.
pub(crate) fn encode_path_segment(value: &str) -> Result<String, ClientError> {
    if matches!(value, "." | "..") {
        return Err(ClientError::InvalidPath(value.to_owned()));
    }
    Ok(encode_query_value(value))
}

/// Percent-encodes a value for use inside a query string. Spaces become `%20`.
pub(crate) fn encode_query_value(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody, ClientError> {
    Ok(RequestBody::Json(serde_json::to_value(body)?))
}

#[cfg(test)]
mod tests {
    use super::{
        ApiClient, ApiFamily, OPEN_BASE_URL, REST_BASE_URL, encode_path_segment,
        encode_query_value,
    };
    use crate::{ClientError, Credential};

    #[test]
    fn families_resolve_fixed_base_urls() {
        assert_eq!(ApiFamily::Rest.base_url(), "https://restapi.e-conomic.com");
        assert_eq!(ApiFamily::Open.base_url(), "https://apis.e-conomic.com");
        assert_eq!(ApiFamily::Rest.base_url(), REST_BASE_URL);
        assert_eq!(ApiFamily::Open.base_url(), OPEN_BASE_URL);
    }

    #[test]
    fn client_base_url_follows_family() {
        let credential = Credential::new("a", "b");
        let rest = ApiClient::rest(&credential).expect("valid client");
        let open = ApiClient::open(&credential).expect("valid client");
        assert_eq!(rest.base_url().as_str(), "https://restapi.e-conomic.com/");
        assert_eq!(open.base_url().as_str(), "https://apis.e-conomic.com/");
        assert_eq!(rest.family(), ApiFamily::Rest);
        assert_eq!(open.headers()["X-AgreementGrantToken"], "b");
    }

    #[test]
    fn base_url_override_is_normalized() {
        let client = ApiClient::rest(&Credential::default())
            .expect("valid client")
            .with_base_url("http://127.0.0.1:8080/mock")
            .expect("valid override");
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/mock/");
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = ApiClient::open(&Credential::default())
            .expect("valid client")
            .with_base_url("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn parses_family_names() {
        assert_eq!("REST".parse::<ApiFamily>(), Ok(ApiFamily::Rest));
        assert_eq!("open".parse::<ApiFamily>(), Ok(ApiFamily::Open));
        assert!("soap".parse::<ApiFamily>().is_err());
    }

    #[test]
    fn encodes_segments_and_queries() {
        assert_eq!(encode_path_segment("EUR").expect("plain"), "EUR");
        assert_eq!(encode_path_segment("A/B 1").expect("escaped"), "A%2FB%201");
        assert_eq!(encode_path_segment("1+1").expect("escaped"), "1%2B1");
        assert_eq!(
            encode_query_value("date$gte:2024-01-01"),
            "date%24gte%3A2024-01-01"
        );
    }

    #[test]
    fn rejects_dot_segments() {
        assert!(matches!(
            encode_path_segment(".."),
            Err(ClientError::InvalidPath(segment)) if segment == ".."
        ));
        assert!(encode_path_segment(".").is_err());
        assert_eq!(encode_path_segment("v1.2").expect("dots inside"), "v1.2");
        assert_eq!(encode_path_segment("...").expect("not a dot segment"), "...");
    }

    #[test]
    fn query_spaces_encode_as_percent_twenty() {
        assert_eq!(
            encode_query_value("name$eq:Acme ApS"),
            "name%24eq%3AAcme%20ApS"
        );
        assert_eq!(encode_query_value("a+b"), "a%2Bb");
    }
}
