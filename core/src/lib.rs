//! Synchronous client and renderer for the portfolio API.
//!
//! # Overview
//! Fetches profile, project, search, and skill data over plain HTTP GETs and
//! projects the decoded records into HTML table fragments, one fragment per
//! named output region. The host (a page, a C application through the ffi
//! crate, a test) decides where each fragment goes.
//!
//! # Design
//! - `PortfolioClient` is stateless — it holds only the injected `base_url`.
//! - Each endpoint is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response); `transport::execute` sits between them, and
//!   `fetch_*` chains all three.
//! - `render` is pure string projection; `view` composes fetch + render and
//!   collapses every failure into an error paragraph, so views are total.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod render;
pub mod transport;
pub mod types;
pub mod view;

pub use client::PortfolioClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use types::{Health, Profile, Project, SearchResults, WorkEntry};
pub use view::Rendered;
