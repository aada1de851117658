//! Raw GitHub REST payloads and their normalization.

use crate::types::facts::{CommunityProfile, Contributor, License, RepositoryFacts};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawOwner {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct RawLicense {
    pub name: String,
    pub key: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawRepository {
    pub owner: RawOwner,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub has_wiki: bool,
    #[serde(default)]
    pub has_pages: bool,
    pub license: Option<RawLicense>,
    pub default_branch: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl RawRepository {
    /// Falls back to `updated_at` when no commit date is known.
    pub fn into_facts(self, last_commit: Option<DateTime<Utc>>) -> RepositoryFacts {
        let last_commit_estimated = last_commit.is_none();
        RepositoryFacts {
            owner: self.owner.login,
            name: self.name,
            description: self.description,
            stars: self.stargazers_count,
            forks: self.forks_count,
            open_issues: self.open_issues_count,
            watchers: self.watchers_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_commit_date: last_commit.unwrap_or(self.updated_at),
            last_commit_estimated,
            has_wiki: self.has_wiki,
            has_pages: self.has_pages,
            license: self.license.map(|license| License {
                name: license.name,
                key: license.key,
                url: license.url,
            }),
            default_branch: self.default_branch,
            topics: self.topics,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawSignature {
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RawCommitDetail {
    pub committer: Option<RawSignature>,
}

#[derive(Debug, Deserialize)]
pub struct RawCommit {
    pub commit: RawCommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct RawContributor {
    pub login: Option<String>,
    #[serde(default)]
    pub contributions: u64,
    pub avatar_url: Option<String>,
}

impl From<RawContributor> for Contributor {
    fn from(raw: RawContributor) -> Self {
        Self {
            login: raw.login.unwrap_or_default(),
            contributions: raw.contributions,
            avatar_url: raw.avatar_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawTreeEntry {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct RawTree {
    #[serde(default)]
    pub tree: Vec<RawTreeEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawParticipation {
    #[serde(default)]
    pub all: Vec<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCommunityFiles {
    pub contributing: Option<serde_json::Value>,
    pub code_of_conduct: Option<serde_json::Value>,
    pub license: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawCommunityProfile {
    #[serde(default)]
    pub health_percentage: u8,
    #[serde(default)]
    pub files: RawCommunityFiles,
}

impl From<RawCommunityProfile> for CommunityProfile {
    fn from(raw: RawCommunityProfile) -> Self {
        Self {
            health_percentage: raw.health_percentage,
            has_contributing: raw.files.contributing.is_some(),
            has_code_of_conduct: raw.files.code_of_conduct.is_some(),
            has_license: raw.files.license.is_some(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawContent {
    pub content: Option<String>,
    pub encoding: Option<String>,
}
