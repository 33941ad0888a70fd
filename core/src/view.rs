//! The five view operations: fetch one endpoint and project the result into
//! an HTML fragment for one output region.
//!
//! # Design
//! A view never fails and never writes anywhere. It validates its input
//! (blank skill/query short-circuits to a prompt without touching the
//! network), fetches through the client, and collapses every `ApiError`
//! into the error paragraph, so the host always receives a `Rendered` value
//! to place. Each view targets its own region; concurrent invocations share
//! no mutable state.
//!
//! The `*_html` functions consume the fetch result and are what unit tests
//! exercise; the public views add only input checks and the region name.

use crate::client::PortfolioClient;
use crate::error::ApiError;
use crate::render;
use crate::types::{Profile, Project, SearchResults};

pub const PROFILE_REGION: &str = "profile-output";
pub const PROJECTS_REGION: &str = "projects-output";
pub const SKILL_REGION: &str = "skill-output";
pub const SEARCH_REGION: &str = "search-output";
pub const TOP_SKILLS_REGION: &str = "top-skills-output";

/// One settled view: the output region it belongs to and the fragment to
/// place there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub region: &'static str,
    pub html: String,
}

/// Fetch the profile and render the Field/Value table.
pub fn profile(client: &PortfolioClient) -> Rendered {
    Rendered {
        region: PROFILE_REGION,
        html: profile_html(client.fetch_profile()),
    }
}

/// Fetch every project and render the Title/Description/Links table.
pub fn projects(client: &PortfolioClient) -> Rendered {
    Rendered {
        region: PROJECTS_REGION,
        html: projects_html(client.fetch_projects(None)),
    }
}

/// Fetch projects matching a skill. Blank input short-circuits to a prompt
/// without a network call; otherwise the entered text is sent as-is.
pub fn projects_by_skill(client: &PortfolioClient, skill: &str) -> Rendered {
    let html = if skill.trim().is_empty() {
        render::notice_text("Please enter a skill.")
    } else {
        projects_html(client.fetch_projects(Some(skill)))
    };
    Rendered {
        region: SKILL_REGION,
        html,
    }
}

/// Run the combined search. Blank input short-circuits to a prompt; an
/// all-empty result echoes the entered query text back in the notice.
pub fn search(client: &PortfolioClient, query: &str) -> Rendered {
    let html = if query.trim().is_empty() {
        render::notice_text("Please enter a search query.")
    } else {
        search_html(query, client.fetch_search(query))
    };
    Rendered {
        region: SEARCH_REGION,
        html,
    }
}

/// Fetch the top skills and render the one-column table.
pub fn top_skills(client: &PortfolioClient) -> Rendered {
    Rendered {
        region: TOP_SKILLS_REGION,
        html: top_skills_html(client.fetch_top_skills()),
    }
}

fn profile_html(result: Result<Profile, ApiError>) -> String {
    match result {
        Ok(profile) => render::profile_table(&profile),
        Err(err) => render::error_text(&err.to_string()),
    }
}

fn projects_html(result: Result<Vec<Project>, ApiError>) -> String {
    match result {
        Ok(projects) if projects.is_empty() => render::notice_text("No projects found."),
        Ok(projects) => render::projects_table(&projects),
        Err(err) => render::error_text(&err.to_string()),
    }
}

fn search_html(query: &str, result: Result<SearchResults, ApiError>) -> String {
    match result {
        Ok(results) if results.is_empty() => {
            render::notice_text(&format!("No results found for query: {query}"))
        }
        Ok(results) => render::search_table(&results),
        Err(err) => render::error_text(&err.to_string()),
    }
}

fn top_skills_html(result: Result<Vec<String>, ApiError>) -> String {
    match result {
        Ok(skills) if skills.is_empty() => render::notice_text("No skills found."),
        Ok(skills) => render::skills_table(&skills),
        Err(err) => render::error_text(&err.to_string()),
    }
}
