//! Domain DTOs for the portfolio API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! keeping the client decoupled from Axum internals. Integration tests catch
//! any schema drift between the two crates.
//!
//! Ordering is load-bearing everywhere: `Vec` fields keep wire order and
//! `links` is an `IndexMap` so the JSON object's insertion order survives
//! decode → render. Unknown fields are ignored on decode; missing fields are
//! a decode error rather than a rendered `undefined`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full profile object returned by `GET /profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub education: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub work: Vec<WorkEntry>,
    pub links: IndexMap<String, String>,
}

/// A single project record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub links: Vec<String>,
}

/// A single work-history record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkEntry {
    pub title: String,
    pub description: String,
}

/// Composite result of `GET /search?q=…`: matches grouped by record kind,
/// each group in the backend's order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResults {
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub work: Vec<WorkEntry>,
}

impl SearchResults {
    /// True when all three groups are empty — the "no results" case.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.projects.is_empty() && self.work.is_empty()
    }
}

/// Liveness payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
}
