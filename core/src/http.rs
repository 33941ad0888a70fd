//! HTTP transfer types shared by the builder, executor, and parser layers.
//!
//! # Design
//! Requests and responses are plain data so the build and parse halves of the
//! client stay deterministic and free of I/O. Every portfolio API call is an
//! unauthenticated GET with no body and no custom headers, which reduces a
//! request to the absolute URL to fetch. `transport::execute` turns one into
//! the other over the network; tests construct `HttpResponse` values directly.
//!
//! All fields use owned types (`String`) so values can cross FFI boundaries
//! without lifetime concerns.

/// An HTTP GET request described as plain data.
///
/// Built by `PortfolioClient::build_*` methods from the injected base URL and
/// an endpoint path (plus percent-encoded query string where present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// Produced by `transport::execute` (or constructed directly in tests), then
/// passed to `PortfolioClient::parse_*` methods for status checking and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
