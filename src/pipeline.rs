//! Orchestrator: gathers facts through the gateway, derives the dependency
//! summary and bus factor, then scores.

use crate::analyze::{self, ScoringInput};
use crate::bus_factor::bus_factor;
use crate::dependencies::sniff_dependencies;
use crate::error::Result;
use crate::gateway::{BoxFuture, RepoDataSource};
use crate::identifier::RepoId;
use crate::types::facts::{FactsBundle, FileListing, RepositoryFacts};
use crate::types::report::{CommitSummary, RepoAnalysis};
use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::{debug, info};

/// Lifts a non-failing fetch into the fallible join.
async fn degraded<T>(fetch: BoxFuture<'_, T>) -> Result<T> {
    Ok(fetch.await)
}

async fn metadata_and_listing<S: RepoDataSource + ?Sized>(
    source: &S,
    repo: &RepoId,
) -> Result<(RepositoryFacts, FileListing)> {
    let repository = source.fetch_repository(repo).await?;
    let files = source
        .fetch_file_listing(repo, &repository.default_branch)
        .await;
    Ok((repository, files))
}

/// Fetches every fact for `repo`. Fails only when repository metadata fails;
/// the remaining fetches are abandoned in that case.
pub async fn collect_facts<S: RepoDataSource + ?Sized>(
    source: &S,
    repo: &RepoId,
) -> Result<FactsBundle> {
    let started = Instant::now();
    let ((repository, files), readme, contributors, commit_activity, languages, community_profile) =
        tokio::try_join!(
            metadata_and_listing(source, repo),
            degraded(source.fetch_readme(repo)),
            degraded(source.fetch_contributors(repo)),
            degraded(source.fetch_commit_activity(repo)),
            degraded(source.fetch_languages(repo)),
            degraded(source.fetch_community_profile(repo)),
        )?;
    debug!(
        repo = %repo,
        files = files.len(),
        contributors = contributors.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "facts fetched"
    );

    let dependencies = sniff_dependencies(source, repo, &files).await;

    Ok(FactsBundle {
        repository,
        contributors,
        files,
        readme,
        commit_activity,
        languages,
        dependencies,
        community_profile,
    })
}

/// Scores an already collected bundle. Pure given `now`.
pub fn assemble(bundle: FactsBundle, url: String, now: DateTime<Utc>) -> RepoAnalysis {
    let bus_factor = bus_factor(&bundle.contributors);
    let health = analyze::score(&ScoringInput::from_bundle(&bundle, bus_factor), now);
    let commit_summary = CommitSummary::from_activity(&bundle.commit_activity);
    let community_health = bundle
        .community_profile
        .as_ref()
        .map(|profile| profile.health_percentage);

    RepoAnalysis {
        url,
        contributors_count: bundle.contributors.len(),
        bus_factor,
        commit_summary,
        community_health,
        details: bundle.repository,
        commit_history: bundle.commit_activity,
        languages: bundle.languages,
        dependencies: bundle.dependencies,
        health,
    }
}

pub async fn analyze_repository<S: RepoDataSource + ?Sized>(
    source: &S,
    repo: &RepoId,
    now: DateTime<Utc>,
) -> Result<RepoAnalysis> {
    let started = Instant::now();
    let bundle = collect_facts(source, repo).await?;
    let analysis = assemble(bundle, repo.canonical_url(), now);
    info!(
        repo = %repo,
        score = analysis.health.health_score,
        verdict = %analysis.health.verdict,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analysis complete"
    );
    Ok(analysis)
}
