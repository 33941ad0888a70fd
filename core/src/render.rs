//! Pure projection of decoded API records into HTML fragments.
//!
//! # Design
//! Writers build markup textually and return it; nothing here performs I/O or
//! touches an output region. The column sets and join separators are the
//! contract the hosting page's styling depends on: Field/Value for the
//! profile, Title/Description/Links for project lists, Type/Details for
//! combined search results. List-valued cells join with `", "`; record-valued
//! cells join with `<br>`.
//!
//! Every interpolated text node is HTML-escaped. The `<br>` separators are
//! markup and are inserted after escaping, never escaped themselves.

use crate::types::{Profile, Project, SearchResults, WorkEntry};

/// Render the profile as the two-column Field/Value table, one row per field
/// in the order ID, Name, Email, Education, Skills, Projects, Work, Links.
pub fn profile_table(profile: &Profile) -> String {
    let mut out = String::from(
        r#"<table id="profile-table"><thead><tr><th>Field</th><th>Value</th></tr></thead><tbody>"#,
    );
    push_row(&mut out, "ID", &esc(&profile.id.to_string()));
    push_row(&mut out, "Name", &esc(&profile.name));
    push_row(&mut out, "Email", &esc(&profile.email));
    push_row(&mut out, "Education", &esc(&profile.education));
    push_row(&mut out, "Skills", &esc(&profile.skills.join(", ")));
    push_row(
        &mut out,
        "Projects",
        &join_records(profile.projects.iter().map(project_details)),
    );
    push_row(
        &mut out,
        "Work",
        &join_records(profile.work.iter().map(work_details)),
    );
    push_row(
        &mut out,
        "Links",
        &join_records(profile.links.iter().map(|(key, value)| format!("{key}: {value}"))),
    );
    out.push_str("</tbody></table>");
    out
}

/// Render a project list as the Title/Description/Links table, one row per
/// project in input order.
pub fn projects_table(projects: &[Project]) -> String {
    let mut out = String::from(
        r#"<table id="projects-table"><thead><tr><th>Title</th><th>Description</th><th>Links</th></tr></thead><tbody>"#,
    );
    for project in projects {
        out.push_str("<tr><td>");
        out.push_str(&esc(&project.title));
        out.push_str("</td><td>");
        out.push_str(&esc(&project.description));
        out.push_str("</td><td>");
        out.push_str(&esc(&project.links.join(", ")));
        out.push_str("</td></tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// Render combined search results as the Type/Details table: skill rows, then
/// project rows, then work rows, each group in input order.
pub fn search_table(results: &SearchResults) -> String {
    let mut out = String::from(
        r#"<table id="search-table"><thead><tr><th>Type</th><th>Details</th></tr></thead><tbody>"#,
    );
    for skill in &results.skills {
        push_row(&mut out, "Skill", &esc(skill));
    }
    for project in &results.projects {
        push_row(&mut out, "Project", &esc(&project_details(project)));
    }
    for entry in &results.work {
        push_row(&mut out, "Work", &esc(&work_details(entry)));
    }
    out.push_str("</tbody></table>");
    out
}

/// Render the top-skills list as a one-column table, one row per skill.
pub fn skills_table(skills: &[String]) -> String {
    let mut out =
        String::from(r#"<table id="skills-table"><thead><tr><th>Skill</th></tr></thead><tbody>"#);
    for skill in skills {
        out.push_str("<tr><td>");
        out.push_str(&esc(skill));
        out.push_str("</td></tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// The error paragraph every failure collapses into.
pub fn error_text(message: &str) -> String {
    format!(r#"<p class="text-red-500">Error: {}</p>"#, esc(message))
}

/// A plain paragraph for prompts and no-result notices.
pub fn notice_text(message: &str) -> String {
    format!("<p>{}</p>", esc(message))
}

/// Text form of a project record: `title: description (link, link)`.
fn project_details(project: &Project) -> String {
    format!(
        "{}: {} ({})",
        project.title,
        project.description,
        project.links.join(", ")
    )
}

/// Text form of a work record: `title: description`.
fn work_details(entry: &WorkEntry) -> String {
    format!("{}: {}", entry.title, entry.description)
}

/// Escape each record's text, then join with `<br>` markup.
fn join_records<I>(records: I) -> String
where
    I: Iterator<Item = String>,
{
    records.map(|r| esc(&r)).collect::<Vec<_>>().join("<br>")
}

fn push_row(out: &mut String, label: &str, value_html: &str) {
    out.push_str("<tr><td>");
    out.push_str(label);
    out.push_str("</td><td>");
    out.push_str(value_html);
    out.push_str("</td></tr>");
}

fn esc(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
