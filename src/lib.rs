//! Async client library for the e-conomic accounting API.
//!
//! Public API layers:
//! - [`Credential`]: secret/grant token pair turned into request headers.
//! - [`ApiClient`]: authenticated client for one [`ApiFamily`] (REST or Open).
//! - [`rest`] and [`open`]: typed resources (customers, invoices, projects, ...).
//! - [`Economic`]: every resource of both families built from one credential.
//! - [`ClientError`]: unified error type used by all calls.
//!
//! Every call returns an [`HttpResponse`] envelope carrying the decoded body,
//! status, headers and an echo of the request that produced it.

mod api;
pub mod catalog;
mod credential;
mod economic;
mod error;
mod http;
pub mod open;
mod pagination;
pub mod rest;

/// Authenticated client and the API families it can target.
pub use api::{ApiClient, ApiFamily, OPEN_BASE_URL, REST_BASE_URL};
/// Token pair used to authenticate every request.
pub use credential::{
    AGREEMENT_GRANT_TOKEN, APP_SECRET_TOKEN, Credential, GRANT_TOKEN_ENV, SECRET_TOKEN_ENV,
};
pub use economic::Economic;
/// Error type returned by all client operations.
pub use error::ClientError;
pub use http::{FileUpload, HttpRequest, HttpResponse, RequestBody, RequestEcho, Transport};
pub use pagination::{
    Collection, DEFAULT_PAGE_SIZE, DEFAULT_SKIP_PAGES, Items, Metadata, MetadataAction, Page,
    Pagination,
};
