//! Verify build/parse/render against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request, a simulated
//! response, and the expected parse result. Parsed results are compared as
//! typed values (not raw strings) to avoid false negatives from
//! field-ordering differences; `expected_html`, where present, is compared
//! byte-for-byte because markup shape is part of the contract.

use portfolio_core::{
    render, ApiError, Health, HttpResponse, PortfolioClient, Profile, Project, SearchResults,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> PortfolioClient {
    PortfolioClient::new(BASE_URL)
}

/// Build an `HttpResponse` from a case's `simulated_response`.
fn response_from(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Match an `ApiError` against a case's `expected_error` description.
fn check_error(name: &str, err: ApiError, expected: &serde_json::Value) {
    match expected["kind"].as_str().unwrap() {
        "http" => {
            let want_status = expected["status"].as_u64().unwrap() as u16;
            match err {
                ApiError::Http { status, body } => {
                    assert_eq!(status, want_status, "{name}: status");
                    if let Some(needle) = expected.get("body_contains") {
                        assert!(
                            body.contains(needle.as_str().unwrap()),
                            "{name}: body should contain {needle}"
                        );
                    }
                }
                other => panic!("{name}: expected HTTP error, got {other:?}"),
            }
        }
        "application" => {
            let want = expected["message"].as_str().unwrap();
            assert_eq!(
                err,
                ApiError::Application(want.to_string()),
                "{name}: application message"
            );
        }
        "decode" => {
            assert!(
                matches!(err, ApiError::Decode(_)),
                "{name}: expected decode error, got {err:?}"
            );
        }
        other => panic!("{name}: unknown expected_error kind: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[test]
fn profile_test_vectors() {
    let raw = include_str!("../../test-vectors/profile.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        // Verify build
        let req = c.build_profile();
        let expected_path = case["expected_request"]["path"].as_str().unwrap();
        assert_eq!(req.url, format!("{BASE_URL}{expected_path}"), "{name}: url");

        // Verify parse
        let result = c.parse_profile(response_from(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
            continue;
        }
        let profile = result.unwrap();
        let expected: Profile = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(profile, expected, "{name}: parsed result");

        // Verify render
        if let Some(expected_html) = case.get("expected_html") {
            assert_eq!(
                render::profile_table(&profile),
                expected_html.as_str().unwrap(),
                "{name}: rendered html"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[test]
fn projects_test_vectors() {
    let raw = include_str!("../../test-vectors/projects.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        // Verify build; an absent input_skill means the unfiltered listing.
        let req = c.build_projects(case["input_skill"].as_str());
        let expected_path = case["expected_request"]["path"].as_str().unwrap();
        assert_eq!(req.url, format!("{BASE_URL}{expected_path}"), "{name}: url");

        // Verify parse
        let result = c.parse_projects(response_from(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
            continue;
        }
        let projects = result.unwrap();
        let expected: Vec<Project> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(projects, expected, "{name}: parsed result");

        // Verify render
        if let Some(expected_html) = case.get("expected_html") {
            assert_eq!(
                render::projects_table(&projects),
                expected_html.as_str().unwrap(),
                "{name}: rendered html"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_test_vectors() {
    let raw = include_str!("../../test-vectors/search.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query = case["input_query"].as_str().unwrap();

        // Verify build
        let req = c.build_search(query);
        let expected_path = case["expected_request"]["path"].as_str().unwrap();
        assert_eq!(req.url, format!("{BASE_URL}{expected_path}"), "{name}: url");

        // Verify parse
        let result = c.parse_search(response_from(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
            continue;
        }
        let results = result.unwrap();
        let expected: SearchResults =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(results, expected, "{name}: parsed result");

        // Verify render
        if let Some(expected_html) = case.get("expected_html") {
            assert_eq!(
                render::search_table(&results),
                expected_html.as_str().unwrap(),
                "{name}: rendered html"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Top skills
// ---------------------------------------------------------------------------

#[test]
fn top_skills_test_vectors() {
    let raw = include_str!("../../test-vectors/top_skills.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        // Verify build
        let req = c.build_top_skills();
        let expected_path = case["expected_request"]["path"].as_str().unwrap();
        assert_eq!(req.url, format!("{BASE_URL}{expected_path}"), "{name}: url");

        // Verify parse
        let result = c.parse_top_skills(response_from(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
            continue;
        }
        let skills = result.unwrap();
        let expected: Vec<String> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(skills, expected, "{name}: parsed result");

        // Verify render
        if let Some(expected_html) = case.get("expected_html") {
            assert_eq!(
                render::skills_table(&skills),
                expected_html.as_str().unwrap(),
                "{name}: rendered html"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[test]
fn health_test_vectors() {
    let raw = include_str!("../../test-vectors/health.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        // Verify build
        let req = c.build_health();
        let expected_path = case["expected_request"]["path"].as_str().unwrap();
        assert_eq!(req.url, format!("{BASE_URL}{expected_path}"), "{name}: url");

        // Verify parse
        let result = c.parse_health(response_from(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
            continue;
        }
        let health = result.unwrap();
        let expected: Health = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(health, expected, "{name}: parsed result");
    }
}
