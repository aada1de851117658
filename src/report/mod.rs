pub mod json;
pub mod md;

use crate::error::RepoHealthError;
use crate::types::report::RepoAnalysis;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(analysis: &RepoAnalysis, format: OutputFormat) -> Result<String, RepoHealthError> {
    match format {
        OutputFormat::Json => json::to_json(analysis).map_err(RepoHealthError::Json),
        OutputFormat::Md => Ok(md::to_markdown(analysis)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::facts::{DependencySummary, License, RepositoryFacts};
    use crate::types::report::{CommitSummary, FileChecks, HealthReport, Verdict};
    use crate::types::scoring::SubScores;
    use chrono::{TimeZone, Utc};

    pub(crate) fn sample_analysis() -> RepoAnalysis {
        let updated = Utc.with_ymd_and_hms(2024, 5, 30, 0, 0, 0).unwrap();
        RepoAnalysis {
            url: "https://github.com/octo/demo".to_string(),
            details: RepositoryFacts {
                owner: "octo".to_string(),
                name: "demo".to_string(),
                description: Some("Demo project".to_string()),
                stars: 120,
                forks: 8,
                open_issues: 14,
                watchers: 120,
                created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
                updated_at: updated,
                last_commit_date: updated,
                last_commit_estimated: false,
                has_wiki: true,
                has_pages: false,
                license: Some(License {
                    name: "MIT License".to_string(),
                    key: "mit".to_string(),
                    url: None,
                }),
                default_branch: "main".to_string(),
                topics: vec!["cli".to_string()],
            },
            contributors_count: 4,
            bus_factor: 62,
            commit_history: vec![1, 0, 3],
            commit_summary: CommitSummary {
                frequency: 1.33,
                total_last_year: 4,
            },
            languages: [("Rust".to_string(), 750), ("Shell".to_string(), 250)]
                .into_iter()
                .collect(),
            dependencies: Some(DependencySummary {
                count: 12,
                manager: "cargo".to_string(),
                file: "Cargo.toml".to_string(),
            }),
            community_health: Some(57),
            health: HealthReport {
                health_score: 72,
                sub_scores: SubScores::new(30, 20, 10, 12),
                file_checks: FileChecks {
                    has_readme: true,
                    readme_size: 2400,
                    has_license: true,
                    has_contributing: true,
                    has_code_of_conduct: false,
                    has_security: false,
                },
                breakdown: vec![
                    "High bus factor: top contributor owns 62% of contributions".to_string(),
                ],
                verdict: Verdict::Intermediate,
            },
        }
    }

    #[test]
    fn render_dispatches_on_format() {
        let analysis = sample_analysis();
        let json = render(&analysis, OutputFormat::Json).expect("json should render");
        assert!(json.trim_start().starts_with('{'));
        let md = render(&analysis, OutputFormat::Md).expect("markdown should render");
        assert!(md.starts_with("# Repository Health: octo/demo"));
    }

    #[test]
    fn output_format_reads_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"json\"").expect("format should parse");
        assert_eq!(parsed.format, OutputFormat::Json);
    }
}
