use crate::types::facts::{CommitActivity, DependencySummary, LanguageBytes, RepositoryFacts};
use crate::types::scoring::{Score, SubScores};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Beginner Friendly")]
    BeginnerFriendly,
    #[serde(rename = "Intermediate")]
    Intermediate,
    #[serde(rename = "Not Beginner Friendly")]
    NotBeginnerFriendly,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeginnerFriendly => "Beginner Friendly",
            Self::Intermediate => "Intermediate",
            Self::NotBeginnerFriendly => "Not Beginner Friendly",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw presence checks the documentation and beginner scores are built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChecks {
    pub has_readme: bool,
    pub readme_size: usize,
    pub has_license: bool,
    pub has_contributing: bool,
    pub has_code_of_conduct: bool,
    /// Informational only; not scored.
    pub has_security: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub health_score: Score,
    pub sub_scores: SubScores,
    pub file_checks: FileChecks,
    pub breakdown: Vec<String>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitSummary {
    /// Mean commits per week over the activity window.
    pub frequency: f64,
    pub total_last_year: u64,
}

impl CommitSummary {
    pub fn from_activity(activity: &[u32]) -> Self {
        let total_last_year: u64 = activity.iter().map(|week| u64::from(*week)).sum();
        let frequency = if activity.is_empty() {
            0.0
        } else {
            let mean = total_last_year as f64 / activity.len() as f64;
            (mean * 100.0).round() / 100.0
        };
        Self {
            frequency,
            total_last_year,
        }
    }
}

/// Full output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoAnalysis {
    pub url: String,
    pub details: RepositoryFacts,
    pub contributors_count: usize,
    pub bus_factor: u8,
    pub commit_history: CommitActivity,
    pub commit_summary: CommitSummary,
    pub languages: LanguageBytes,
    pub dependencies: Option<DependencySummary>,
    pub community_health: Option<u8>,
    #[serde(flatten)]
    pub health: HealthReport,
}
