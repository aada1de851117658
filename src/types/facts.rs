//! Normalized repository facts, fetched once per analysis and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root-level paths of the default branch (flat, non-recursive).
pub type FileListing = Vec<String>;

/// Weekly commit counts, oldest first, most recent week last.
pub type CommitActivity = Vec<u32>;

/// Bytes of source per language as reported by the hosting platform.
pub type LanguageBytes = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub key: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryFacts {
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub watchers: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_commit_date: DateTime<Utc>,
    /// Set when `last_commit_date` is the repository `updated_at` stand-in.
    #[serde(default)]
    pub last_commit_estimated: bool,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub license: Option<License>,
    pub default_branch: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// A contributor entry. Lists are ordered by `contributions`, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
    #[serde(default)]
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySummary {
    pub count: usize,
    pub manager: String,
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityProfile {
    pub health_percentage: u8,
    pub has_contributing: bool,
    pub has_code_of_conduct: bool,
    pub has_license: bool,
}

/// Everything the scoring engine consumes for one repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactsBundle {
    pub repository: RepositoryFacts,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    #[serde(default)]
    pub files: FileListing,
    #[serde(default)]
    pub readme: Option<String>,
    #[serde(default)]
    pub commit_activity: CommitActivity,
    #[serde(default)]
    pub languages: LanguageBytes,
    #[serde(default)]
    pub dependencies: Option<DependencySummary>,
    #[serde(default)]
    pub community_profile: Option<CommunityProfile>,
}
