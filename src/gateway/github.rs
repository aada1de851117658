use super::content::decode_content;
use super::wire::{
    RawCommit, RawCommunityProfile, RawContent, RawContributor, RawParticipation, RawRepository,
    RawTree,
};
use super::{BoxFuture, RepoDataSource};
use crate::error::{RepoHealthError, Result};
use crate::identifier::RepoId;
use crate::types::config::GatewayConfig;
use crate::types::facts::{
    CommitActivity, CommunityProfile, Contributor, FileListing, LanguageBytes, RepositoryFacts,
};
use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";

/// GitHub REST implementation of the data gateway.
#[derive(Debug, Clone)]
pub struct GitHubGateway {
    config: GatewayConfig,
    client: Client,
}

impl GitHubGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    fn repo_url(&self, repo: &RepoId, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{suffix}",
            self.config.api_url.trim_end_matches('/'),
            repo.owner,
            repo.name
        )
    }

    fn get(&self, url: &str, accept: &str) -> RequestBuilder {
        debug!(%url, "github request");
        let request = self.client.get(url).header(ACCEPT, accept);
        match self.config.token.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Best-effort JSON fetch: any failure is logged and yields `None`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Option<T> {
        let response = match self.get(url, JSON_MEDIA_TYPE).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(%err, "{what} request failed");
                return None;
            }
        };
        let status = response.status();
        if status == StatusCode::ACCEPTED {
            warn!(%url, "{what} still being computed upstream, treating as unavailable");
            return None;
        }
        if !status.is_success() {
            warn!(%status, "{what} unavailable");
            return None;
        }
        match response.json::<T>().await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%err, "{what} response could not be decoded");
                None
            }
        }
    }

    /// Date of the newest commit on the default branch, if it can be read.
    pub async fn fetch_last_commit_date(&self, repo: &RepoId) -> Option<DateTime<Utc>> {
        let url = self.repo_url(repo, "/commits?per_page=1");
        let commits: Vec<RawCommit> = self.get_json(&url, "latest commit").await?;
        commits
            .into_iter()
            .next()
            .and_then(|commit| commit.commit.committer)
            .map(|committer| committer.date)
    }

    async fn repository(&self, repo: &RepoId) -> Result<RepositoryFacts> {
        let url = self.repo_url(repo, "");
        let (response, last_commit) = tokio::join!(
            self.get(&url, JSON_MEDIA_TYPE).send(),
            self.fetch_last_commit_date(repo)
        );
        let response = response?;
        let status = response.status();
        if !status.is_success() {
            return Err(map_metadata_status(repo, status));
        }

        let raw: RawRepository = response.json().await?;
        if last_commit.is_none() {
            warn!(repo = %repo, "latest commit unavailable, using updated_at");
        }
        Ok(raw.into_facts(last_commit))
    }

    async fn contributors(&self, repo: &RepoId) -> Vec<Contributor> {
        let url = self.repo_url(
            repo,
            &format!("/contributors?per_page={}", self.config.contributors_per_page),
        );
        self.get_json::<Vec<RawContributor>>(&url, "contributors")
            .await
            .map(|raw| raw.into_iter().map(Contributor::from).collect())
            .unwrap_or_default()
    }

    async fn file_listing(&self, repo: &RepoId, branch: &str) -> FileListing {
        let url = self.repo_url(repo, &format!("/git/trees/{}", urlencoding::encode(branch)));
        self.get_json::<RawTree>(&url, "file listing")
            .await
            .map(|tree| tree.tree.into_iter().map(|entry| entry.path).collect())
            .unwrap_or_default()
    }

    async fn readme(&self, repo: &RepoId) -> Option<String> {
        let url = self.repo_url(repo, "/readme");
        let response = match self.get(&url, RAW_MEDIA_TYPE).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(%err, "readme request failed");
                return None;
            }
        };
        if !response.status().is_success() {
            debug!(status = %response.status(), "readme unavailable");
            return None;
        }
        match response.text().await {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(%err, "readme body could not be read");
                None
            }
        }
    }

    async fn commit_activity(&self, repo: &RepoId) -> CommitActivity {
        let url = self.repo_url(repo, "/stats/participation");
        self.get_json::<RawParticipation>(&url, "commit activity")
            .await
            .map(|participation| participation.all)
            .unwrap_or_default()
    }

    async fn languages(&self, repo: &RepoId) -> LanguageBytes {
        let url = self.repo_url(repo, "/languages");
        self.get_json(&url, "languages").await.unwrap_or_default()
    }

    async fn community_profile(&self, repo: &RepoId) -> Option<CommunityProfile> {
        let url = self.repo_url(repo, "/community/profile");
        self.get_json::<RawCommunityProfile>(&url, "community profile")
            .await
            .map(CommunityProfile::from)
    }

    async fn file_content(&self, repo: &RepoId, path: &str) -> Option<String> {
        let url = self.repo_url(repo, &format!("/contents/{path}"));
        let raw: RawContent = self.get_json(&url, "file content").await?;
        decode_content(raw.content.as_deref()?, raw.encoding.as_deref())
    }
}

fn map_metadata_status(repo: &RepoId, status: StatusCode) -> RepoHealthError {
    match status {
        StatusCode::NOT_FOUND => RepoHealthError::RepositoryNotFound(repo.to_string()),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            RepoHealthError::RateLimitExceeded
        }
        other => RepoHealthError::Upstream {
            status: other.as_u16(),
            message: other
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
        },
    }
}

impl RepoDataSource for GitHubGateway {
    fn fetch_repository<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, Result<RepositoryFacts>> {
        Box::pin(self.repository(repo))
    }

    fn fetch_contributors<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, Vec<Contributor>> {
        Box::pin(self.contributors(repo))
    }

    fn fetch_file_listing<'a>(
        &'a self,
        repo: &'a RepoId,
        branch: &'a str,
    ) -> BoxFuture<'a, FileListing> {
        Box::pin(self.file_listing(repo, branch))
    }

    fn fetch_readme<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, Option<String>> {
        Box::pin(self.readme(repo))
    }

    fn fetch_commit_activity<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, CommitActivity> {
        Box::pin(self.commit_activity(repo))
    }

    fn fetch_languages<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, LanguageBytes> {
        Box::pin(self.languages(repo))
    }

    fn fetch_community_profile<'a>(
        &'a self,
        repo: &'a RepoId,
    ) -> BoxFuture<'a, Option<CommunityProfile>> {
        Box::pin(self.community_profile(repo))
    }

    fn fetch_file_content<'a>(
        &'a self,
        repo: &'a RepoId,
        path: &'a str,
    ) -> BoxFuture<'a, Option<String>> {
        Box::pin(self.file_content(repo, path))
    }
}
