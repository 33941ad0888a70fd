//! Stateless HTTP request builder and response parser for the portfolio API.
//!
//! # Design
//! `PortfolioClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`,
//! so both halves stay deterministic and unit-testable without a network.
//! The `fetch_*` methods chain build → `transport::execute` → parse for
//! callers that want the whole round-trip.
//!
//! Query values (`skill=`, `q=`) are percent-encoded with `form_urlencoded`,
//! never by the caller; a space arrives at the server as `+`.

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{Health, Profile, Project, SearchResults};

/// Synchronous client for the portfolio API, bound to one base URL.
///
/// The base URL is injected at construction (point it at the mock server in
/// tests) and a trailing slash is tolerated.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    base_url: String,
}

impl PortfolioClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_profile(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/profile", self.base_url),
        }
    }

    /// `GET /projects`, optionally narrowed to projects matching a skill.
    pub fn build_projects(&self, skill: Option<&str>) -> HttpRequest {
        let url = match skill {
            Some(skill) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("skill", skill)
                    .finish();
                format!("{}/projects?{}", self.base_url, query)
            }
            None => format!("{}/projects", self.base_url),
        };
        HttpRequest { url }
    }

    pub fn build_search(&self, query: &str) -> HttpRequest {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", query)
            .finish();
        HttpRequest {
            url: format!("{}/search?{}", self.base_url, encoded),
        }
    }

    pub fn build_top_skills(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/skills/top", self.base_url),
        }
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/health", self.base_url),
        }
    }

    pub fn parse_profile(&self, response: HttpResponse) -> Result<Profile, ApiError> {
        decode(&response)
    }

    pub fn parse_projects(&self, response: HttpResponse) -> Result<Vec<Project>, ApiError> {
        decode(&response)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<SearchResults, ApiError> {
        decode(&response)
    }

    pub fn parse_top_skills(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        decode(&response)
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        decode(&response)
    }

    pub fn fetch_profile(&self) -> Result<Profile, ApiError> {
        let response = transport::execute(&self.build_profile())?;
        self.parse_profile(response)
    }

    pub fn fetch_projects(&self, skill: Option<&str>) -> Result<Vec<Project>, ApiError> {
        let response = transport::execute(&self.build_projects(skill))?;
        self.parse_projects(response)
    }

    pub fn fetch_search(&self, query: &str) -> Result<SearchResults, ApiError> {
        let response = transport::execute(&self.build_search(query))?;
        self.parse_search(response)
    }

    pub fn fetch_top_skills(&self) -> Result<Vec<String>, ApiError> {
        let response = transport::execute(&self.build_top_skills())?;
        self.parse_top_skills(response)
    }

    pub fn fetch_health(&self) -> Result<Health, ApiError> {
        let response = transport::execute(&self.build_health())?;
        self.parse_health(response)
    }
}

/// Shared response pipeline: status gate, application-error sniff, typed decode.
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    check_status(response)?;
    if let Some(message) = application_error(&response.body) {
        return Err(ApiError::Application(message));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Reject any status outside the 2xx success range, keeping the body text
/// for the rendered message.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..=299).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Extract the message when a 2xx body is an `{"error": …}` payload.
/// Anything that is not an object with a string `error` field falls through
/// to the typed decode.
fn application_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.as_object()?.get("error")?.as_str().map(str::to_string)
}
