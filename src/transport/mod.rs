//! HTTP dispatch layer.
//!
//! This module abstracts the single network round trip behind a sealed
//! [`Transport`] trait. The production implementation is [`HttpTransport`]
//! (reqwest); the client core stays testable against an in-crate spy.
//!
//! A transport performs exactly one attempt per call — no retry, no backoff
//! — and distinguishes two outcomes only: a response was obtained (any HTTP
//! status, returned raw for the caller to interpret) or no response was
//! obtained at all (surfaced as the transport error kind). Interpreting
//! non-success statuses is the job of the error translation in
//! [`crate::error`], not of the transport.

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;

use crate::error::Result;

pub mod config;
pub mod http;
pub(crate) mod sealed;

pub use config::HttpConfig;
pub use http::HttpTransport;

/// HTTP verb for a dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Resource read.
    Get,
    /// Resource creation or action trigger.
    Post,
    /// Resource update or state transition.
    Put,
    /// Relation removal.
    Delete,
}

impl Method {
    /// Returns the verb as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Everything needed to dispatch one request.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    /// API base URL (e.g., <https://sandbox.moip.com.br/assinaturas/v1>).
    pub base_url: &'a str,
    /// Resolved resource path (e.g., `/plans/gold`), starting with `/`.
    pub path: &'a str,
    /// `Authorization` header value, attached to every request.
    pub authorization: &'a str,
    /// JSON request body, when the operation carries one. Its presence also
    /// drives the `Content-Type: application/json` header.
    pub body: Option<&'a [u8]>,
}

/// Raw response from one dispatch.
///
/// Returned for every HTTP status; the transport does not decide what a
/// non-success status means.
#[derive(Debug)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is in the 2xx success range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport abstraction: exactly one network attempt per call.
///
/// This trait is sealed; only implementations within this crate are allowed.
///
/// # Errors
///
/// Implementations return the transport error kind only when no response was
/// obtained (connection, DNS, timeout). A response with a non-success status
/// is still an `Ok` — translating it is the caller's responsibility.
pub trait Transport: sealed::private::Sealed + Send + Sync {
    /// Executes a single request attempt.
    fn execute<'a>(
        &'a self,
        method: Method,
        ctx: RequestContext<'a>,
    ) -> impl Future<Output = Result<RawResponse>> + Send + 'a;
}
