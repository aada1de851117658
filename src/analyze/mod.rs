//! Health Scoring Engine.
//!
//! A pure function of the normalized facts and an injected `now`. Each
//! category lives in its own module and appends its findings to the shared
//! breakdown in a fixed order: documentation, maintenance, collaboration,
//! beginner friendliness.

pub mod beginner;
pub mod collaboration;
pub mod documentation;
pub mod maintenance;

use crate::types::facts::{
    CommunityProfile, Contributor, DependencySummary, FactsBundle, RepositoryFacts,
};
use crate::types::report::{FileChecks, HealthReport, Verdict};
use crate::types::scoring::{Score, SubScores};
use chrono::{DateTime, Utc};

const BEGINNER_FRIENDLY_MIN_BEGINNER: Score = 15;
const BEGINNER_FRIENDLY_MIN_TOTAL: Score = 60;
const INTERMEDIATE_MIN_BEGINNER: Score = 5;
const INTERMEDIATE_MIN_TOTAL: Score = 40;

#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub repository: &'a RepositoryFacts,
    pub contributors: &'a [Contributor],
    pub files: &'a [String],
    pub readme: Option<&'a str>,
    pub commit_activity: &'a [u32],
    pub bus_factor: u8,
    pub dependencies: Option<&'a DependencySummary>,
    pub community_profile: Option<&'a CommunityProfile>,
}

impl<'a> ScoringInput<'a> {
    pub fn from_bundle(bundle: &'a FactsBundle, bus_factor: u8) -> Self {
        Self {
            repository: &bundle.repository,
            contributors: &bundle.contributors,
            files: &bundle.files,
            readme: bundle.readme.as_deref(),
            commit_activity: &bundle.commit_activity,
            bus_factor,
            dependencies: bundle.dependencies.as_ref(),
            community_profile: bundle.community_profile.as_ref(),
        }
    }
}

/// Case-insensitive substring match against root file names.
fn listing_contains(files: &[String], needle: &str) -> bool {
    files
        .iter()
        .any(|file| file.to_ascii_lowercase().contains(needle))
}

pub fn file_checks(input: &ScoringInput<'_>) -> FileChecks {
    let readme = input.readme.filter(|readme| !readme.is_empty());
    let profile = input.community_profile;
    FileChecks {
        has_readme: readme.is_some(),
        readme_size: readme.map(str::len).unwrap_or(0),
        has_license: input.repository.license.is_some()
            || profile.is_some_and(|profile| profile.has_license),
        has_contributing: listing_contains(input.files, "contributing")
            || profile.is_some_and(|profile| profile.has_contributing),
        has_code_of_conduct: listing_contains(input.files, "code_of_conduct")
            || profile.is_some_and(|profile| profile.has_code_of_conduct),
        has_security: listing_contains(input.files, "security"),
    }
}

pub fn verdict(sub_scores: &SubScores, total: Score) -> Verdict {
    let beginner = sub_scores.beginner_friendly;
    if beginner >= BEGINNER_FRIENDLY_MIN_BEGINNER && total > BEGINNER_FRIENDLY_MIN_TOTAL {
        Verdict::BeginnerFriendly
    } else if beginner >= INTERMEDIATE_MIN_BEGINNER && total > INTERMEDIATE_MIN_TOTAL {
        Verdict::Intermediate
    } else {
        Verdict::NotBeginnerFriendly
    }
}

pub fn score(input: &ScoringInput<'_>, now: DateTime<Utc>) -> HealthReport {
    let checks = file_checks(input);
    let mut breakdown = Vec::new();

    let documentation = documentation::documentation_score(input, &checks, &mut breakdown);
    let maintenance = maintenance::maintenance_score(input, now, &mut breakdown);
    let collaboration = collaboration::collaboration_score(input, &mut breakdown);
    let beginner_friendly = beginner::beginner_score(input, &checks, &mut breakdown);

    let sub_scores = SubScores::new(documentation, maintenance, collaboration, beginner_friendly);
    let health_score = sub_scores.total();

    HealthReport {
        health_score,
        verdict: verdict(&sub_scores, health_score),
        sub_scores,
        file_checks: checks,
        breakdown,
    }
}
