//! Repository Data Gateway.
//!
//! Typed accessors over the hosting API. Only `fetch_repository` can fail;
//! every other accessor degrades to an empty or absent value.

pub mod content;
pub mod github;
pub mod wire;

use crate::error::Result;
use crate::identifier::RepoId;
use crate::types::facts::{
    CommitActivity, CommunityProfile, Contributor, FileListing, LanguageBytes, RepositoryFacts,
};
use std::future::Future;
use std::pin::Pin;

pub use github::GitHubGateway;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait RepoDataSource: Sync {
    /// Repository metadata with the last-commit date resolved.
    fn fetch_repository<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, Result<RepositoryFacts>>;

    fn fetch_contributors<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, Vec<Contributor>>;

    fn fetch_file_listing<'a>(
        &'a self,
        repo: &'a RepoId,
        branch: &'a str,
    ) -> BoxFuture<'a, FileListing>;

    fn fetch_readme<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, Option<String>>;

    fn fetch_commit_activity<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, CommitActivity>;

    fn fetch_languages<'a>(&'a self, repo: &'a RepoId) -> BoxFuture<'a, LanguageBytes>;

    fn fetch_community_profile<'a>(
        &'a self,
        repo: &'a RepoId,
    ) -> BoxFuture<'a, Option<CommunityProfile>>;

    /// Decoded text of a single file, or `None` when it cannot be read.
    fn fetch_file_content<'a>(
        &'a self,
        repo: &'a RepoId,
        path: &'a str,
    ) -> BoxFuture<'a, Option<String>>;
}
