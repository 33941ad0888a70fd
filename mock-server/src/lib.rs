use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub links: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkEntry {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub work: Vec<WorkEntry>,
}

#[derive(Deserialize)]
struct ProjectsQuery {
    skill: Option<String>,
}

#[derive(Deserialize)]
struct SearchQuery {
    q: String,
}

pub type Db = Arc<RwLock<Option<Profile>>>;

/// Router with no profile seeded; `/profile` answers 404.
pub fn app() -> Router {
    router(Arc::new(RwLock::new(None)))
}

/// Router seeded with the given profile.
pub fn app_with_profile(profile: Profile) -> Router {
    router(Arc::new(RwLock::new(Some(profile))))
}

fn router(db: Db) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/profile", get(get_profile))
        .route("/projects", get(list_projects))
        .route("/search", get(search))
        .route("/skills/top", get(top_skills))
        .with_state(db)
}

/// Serve the sample profile.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_profile(sample_profile())).await
}

/// Serve with nothing seeded, for exercising the missing-profile paths.
pub async fn run_empty(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Deterministic fixture used by the binary and by integration tests.
/// Six skills on purpose: `/skills/top` caps at five.
pub fn sample_profile() -> Profile {
    let links: IndexMap<String, String> = [
        ("github", "https://github.com/arivera"),
        ("linkedin", "https://linkedin.com/in/arivera"),
        ("blog", "https://arivera.dev"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    Profile {
        id: Uuid::from_u128(0x00c0_ffee),
        name: "Alex Rivera".to_string(),
        email: "alex.rivera@example.com".to_string(),
        education: "BSc Computer Science, University of Utrecht".to_string(),
        skills: [
            "Rust",
            "Python",
            "FastAPI",
            "PostgreSQL",
            "Docker",
            "TypeScript",
        ]
        .map(String::from)
        .to_vec(),
        projects: vec![
            Project {
                title: "api-playground".to_string(),
                description: "FastAPI profile service with search and skill filters".to_string(),
                links: vec![
                    "https://github.com/arivera/api-playground".to_string(),
                    "https://api-playground.example.com".to_string(),
                ],
            },
            Project {
                title: "tabledump".to_string(),
                description: "Rust CLI that exports PostgreSQL tables to CSV".to_string(),
                links: vec!["https://github.com/arivera/tabledump".to_string()],
            },
            Project {
                title: "quicknotes".to_string(),
                description: "TypeScript note-taking app with offline sync".to_string(),
                links: Vec::new(),
            },
        ],
        work: vec![
            WorkEntry {
                title: "Backend Engineer, Datakraft".to_string(),
                description: "Built ingestion pipelines and internal APIs in Python".to_string(),
            },
            WorkEntry {
                title: "Software Engineer, Nordwind Labs".to_string(),
                description: "Maintained a Rust billing service".to_string(),
            },
        ],
        links,
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "alive"}))
}

async fn get_profile(
    State(db): State<Db>,
) -> Result<Json<Profile>, (StatusCode, Json<serde_json::Value>)> {
    let profile = db.read().await;
    profile.clone().map(Json).ok_or((
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "Profile not found"})),
    ))
}

async fn list_projects(
    State(db): State<Db>,
    Query(params): Query<ProjectsQuery>,
) -> Json<Vec<Project>> {
    let profile = db.read().await;
    let projects = match (profile.as_ref(), params.skill.as_deref()) {
        (Some(profile), Some(skill)) => profile
            .projects
            .iter()
            .filter(|project| project_matches(project, skill))
            .cloned()
            .collect(),
        (Some(profile), None) => profile.projects.clone(),
        (None, _) => Vec::new(),
    };
    Json(projects)
}

async fn search(State(db): State<Db>, Query(params): Query<SearchQuery>) -> Json<SearchResults> {
    let profile = db.read().await;
    let results = match profile.as_ref() {
        Some(profile) => search_profile(profile, &params.q),
        None => SearchResults {
            skills: Vec::new(),
            projects: Vec::new(),
            work: Vec::new(),
        },
    };
    Json(results)
}

async fn top_skills(State(db): State<Db>) -> Json<Vec<String>> {
    let profile = db.read().await;
    let skills = profile
        .as_ref()
        .map(|profile| profile.skills.iter().take(5).cloned().collect())
        .unwrap_or_default();
    Json(skills)
}

/// Case-insensitive substring match over a project's title and description.
fn project_matches(project: &Project, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
}

/// Case-insensitive substring search across skills, projects, and work.
fn search_profile(profile: &Profile, query: &str) -> SearchResults {
    let needle = query.to_lowercase();
    SearchResults {
        skills: profile
            .skills
            .iter()
            .filter(|skill| skill.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
        projects: profile
            .projects
            .iter()
            .filter(|project| project_matches(project, query))
            .cloned()
            .collect(),
        work: profile
            .work
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect(),
    }
}
