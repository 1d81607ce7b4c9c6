//! Shared data types for the portfolio site.
//!
//! This crate defines the project model fetched from the static
//! `projects.json` feed and the display derivations the frontend
//! renders from it. Everything here is platform-neutral so it can
//! be unit tested on the native target.

use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

/// Shown in place of a missing project description.
pub const DESCRIPTION_FALLBACK: &str = "No description provided.";

/// Topic label reserved for content curation by the data source.
/// It selects which projects appear in the feed and is never displayed.
pub const CURATION_TOPIC: &str = "featured";

/// A single portfolio entry from the project feed.
///
/// The shape follows the GitHub repository API, which is what the
/// static feed is generated from. All of it is read-only: the feed
/// is fetched once per page view and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique within the feed; used as a stable display key
    pub id: u64,
    /// Raw identifier, words separated by `-` or `_`
    pub name: String,
    /// May be null or absent
    pub description: Option<String>,
    /// External link target
    pub html_url: String,
    /// ISO-8601 timestamp of the last update
    pub updated_at: String,
    /// Free-text labels, source order preserved
    #[serde(default)]
    pub topics: Vec<String>,
    /// Fallback badge label when there are no topics
    #[serde(default)]
    pub language: Option<String>,
}

impl Project {
    /// Human-readable name derived from the raw identifier.
    pub fn display_name(&self) -> String {
        format_project_name(&self.name)
    }

    /// Description, or the fixed fallback when the feed has none.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(DESCRIPTION_FALLBACK)
    }

    /// Year of the last update, or `None` if `updated_at` does not parse.
    pub fn updated_year(&self) -> Option<i32> {
        DateTime::parse_from_rfc3339(&self.updated_at)
            .ok()
            .map(|t| t.year())
    }

    /// Badge labels for this project, in display order.
    ///
    /// Non-empty `topics` win, minus the reserved curation label.
    /// Otherwise `language` is shown as a single badge when present.
    /// Note that a topic list containing only the curation label
    /// yields no badges at all; the language fallback only applies
    /// when the list is empty.
    pub fn badges(&self) -> Vec<&str> {
        if !self.topics.is_empty() {
            self.topics
                .iter()
                .map(String::as_str)
                .filter(|t| *t != CURATION_TOPIC)
                .collect()
        } else if let Some(language) = self.language.as_deref() {
            vec![language]
        } else {
            Vec::new()
        }
    }
}

/// Turn a raw project identifier into a display name.
///
/// Splits on every `-` and `_`, uppercases the first character of each
/// token, and rejoins with single spaces. Empty tokens are kept, so
/// consecutive separators produce a double space in the output. That
/// quirk is pinned by a test; the feed has no such names today, but
/// silently collapsing them would change the contract.
pub fn format_project_name(raw: &str) -> String {
    raw.split(['-', '_'])
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decode a feed body into projects, in source order.
///
/// Returns `None` for anything that is not a JSON array of projects;
/// the caller treats that the same as a transport failure.
pub fn decode_projects(body: &str) -> Option<Vec<Project>> {
    serde_json::from_str(body).ok()
}

/// Lifecycle of the project feed, one per page view.
///
/// `Idle` becomes `Loading` exactly once, on first mount; `Loaded` and
/// `Failed` are terminal. Collapsing the loading flag and the list into
/// one enum keeps ambiguous combinations (loaded-but-empty vs. not yet
/// fetched) unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Idle,
    Loading,
    Loaded(Vec<Project>),
    Failed,
}

impl FeedState {
    /// Whether the feed has reached a terminal state.
    pub fn is_settled(&self) -> bool {
        matches!(self, FeedState::Loaded(_) | FeedState::Failed)
    }

    /// Whether to render the "no projects found" placeholder.
    ///
    /// A failed fetch and a genuinely empty feed are deliberately
    /// indistinguishable here: a broken data feed degrades the page
    /// instead of breaking it.
    pub fn shows_placeholder(&self) -> bool {
        match self {
            FeedState::Failed => true,
            FeedState::Loaded(projects) => projects.is_empty(),
            FeedState::Idle | FeedState::Loading => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            id: 1,
            name: "sample-project".to_string(),
            description: Some("A sample".to_string()),
            html_url: "https://github.com/example/sample-project".to_string(),
            updated_at: "2025-06-01T12:00:00Z".to_string(),
            topics: Vec::new(),
            language: None,
        }
    }

    #[test]
    fn test_format_name_separators() {
        assert_eq!(format_project_name("my-cool_project"), "My Cool Project");
    }

    #[test]
    fn test_format_name_single_word() {
        assert_eq!(format_project_name("portfolio"), "Portfolio");
    }

    #[test]
    fn test_format_name_consecutive_separators() {
        // Empty tokens are preserved, so "a--b" renders with a double
        // space. Pinned so the behavior cannot change silently.
        assert_eq!(format_project_name("a--b"), "A  B");
    }

    #[test]
    fn test_format_name_empty_input() {
        assert_eq!(format_project_name(""), "");
    }

    #[test]
    fn test_format_name_leaves_remainder_unchanged() {
        assert_eq!(format_project_name("gRPC-demo"), "GRPC Demo");
    }

    #[test]
    fn test_badges_filter_curation_topic() {
        let mut project = sample_project();
        project.topics = vec!["featured".to_string(), "cli".to_string()];
        project.language = Some("Rust".to_string());

        assert_eq!(project.badges(), vec!["cli"]);
    }

    #[test]
    fn test_badges_language_fallback() {
        let mut project = sample_project();
        project.language = Some("Go".to_string());

        assert_eq!(project.badges(), vec!["Go"]);
    }

    #[test]
    fn test_badges_none() {
        let project = sample_project();

        assert!(project.badges().is_empty());
    }

    #[test]
    fn test_badges_only_curation_topic() {
        // A non-empty topic list wins even when filtering leaves
        // nothing to show; the language fallback does not kick in.
        let mut project = sample_project();
        project.topics = vec!["featured".to_string()];
        project.language = Some("Rust".to_string());

        assert!(project.badges().is_empty());
    }

    #[test]
    fn test_badges_preserve_source_order() {
        let mut project = sample_project();
        project.topics = vec![
            "wasm".to_string(),
            "featured".to_string(),
            "yew".to_string(),
            "frontend".to_string(),
        ];

        assert_eq!(project.badges(), vec!["wasm", "yew", "frontend"]);
    }

    #[test]
    fn test_updated_year() {
        let project = sample_project();

        assert_eq!(project.updated_year(), Some(2025));
    }

    #[test]
    fn test_updated_year_unparseable() {
        let mut project = sample_project();
        project.updated_at = "yesterday".to_string();

        assert_eq!(project.updated_year(), None);
    }

    #[test]
    fn test_description_fallback() {
        let mut project = sample_project();
        assert_eq!(project.display_description(), "A sample");

        project.description = None;
        assert_eq!(project.display_description(), DESCRIPTION_FALLBACK);
    }

    #[test]
    fn test_decode_preserves_length_and_order() {
        let body = r#"[
            {"id": 3, "name": "gamma", "html_url": "https://example.com/3",
             "updated_at": "2024-03-01T00:00:00Z"},
            {"id": 1, "name": "alpha", "html_url": "https://example.com/1",
             "updated_at": "2024-01-01T00:00:00Z"},
            {"id": 2, "name": "beta", "html_url": "https://example.com/2",
             "updated_at": "2024-02-01T00:00:00Z"}
        ]"#;

        let projects = decode_projects(body).unwrap();

        assert_eq!(projects.len(), 3);
        let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_decode_optional_fields_absent() {
        let body = r#"[{"id": 1, "name": "bare", "description": null,
            "html_url": "https://example.com", "updated_at": "2024-01-01T00:00:00Z"}]"#;

        let projects = decode_projects(body).unwrap();

        assert_eq!(projects[0].description, None);
        assert!(projects[0].topics.is_empty());
        assert_eq!(projects[0].language, None);
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode_projects("[]"), Some(Vec::new()));
    }

    #[test]
    fn test_decode_malformed_body() {
        assert_eq!(decode_projects("<html>404</html>"), None);
        assert_eq!(decode_projects("{\"not\": \"an array\"}"), None);
        assert_eq!(decode_projects(""), None);
    }

    #[test]
    fn test_feed_state_placeholder() {
        assert!(FeedState::Failed.shows_placeholder());
        assert!(FeedState::Loaded(Vec::new()).shows_placeholder());
        assert!(!FeedState::Idle.shows_placeholder());
        assert!(!FeedState::Loading.shows_placeholder());
        assert!(!FeedState::Loaded(vec![sample_project()]).shows_placeholder());
    }

    #[test]
    fn test_feed_state_settled() {
        assert!(FeedState::Failed.is_settled());
        assert!(FeedState::Loaded(Vec::new()).is_settled());
        assert!(!FeedState::Idle.is_settled());
        assert!(!FeedState::Loading.is_settled());
    }

    #[test]
    fn test_project_roundtrip() {
        let project = sample_project();
        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, project);
    }
}
