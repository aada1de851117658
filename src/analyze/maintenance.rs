use super::ScoringInput;
use crate::types::scoring::Score;
use chrono::{DateTime, Utc};

/// Weeks of the activity series treated as "recent".
pub const RECENT_WEEKS: usize = 12;

const SECONDS_PER_DAY: f64 = 86_400.0;
const INACTIVE_DAYS: f64 = 365.0;
const STALE_DAYS: f64 = 90.0;

/// (days since last commit, points): first row whose bound is not reached wins.
const RECENCY_TABLE: [(f64, Score); 3] = [(7.0, 15), (30.0, 10), (STALE_DAYS, 5)];

/// (active recent weeks, points): first row whose floor is exceeded wins.
const CONSISTENCY_TABLE: [(usize, Score); 3] = [(10, 15), (5, 10), (0, 5)];

pub const INACTIVE: &str = "Repository seems inactive (> 1 year without commits)";
pub const STALE: &str = "Inconsistent maintenance (no commits in the last 90 days)";
pub const NO_RECENT_WEEKS: &str =
    "Inconsistent maintenance (no weekly commit activity in the last 12 weeks)";

pub fn days_since(last_commit: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - last_commit).num_seconds().max(0);
    seconds as f64 / SECONDS_PER_DAY
}

pub fn active_recent_weeks(activity: &[u32]) -> usize {
    activity
        .iter()
        .rev()
        .take(RECENT_WEEKS)
        .filter(|commits| **commits > 0)
        .count()
}

pub fn recency_points(days: f64) -> Score {
    RECENCY_TABLE
        .iter()
        .find(|(bound, _)| days < *bound)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub fn consistency_points(active_weeks: usize) -> Score {
    CONSISTENCY_TABLE
        .iter()
        .find(|(floor, _)| active_weeks > *floor)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub fn maintenance_score(
    input: &ScoringInput<'_>,
    now: DateTime<Utc>,
    breakdown: &mut Vec<String>,
) -> Score {
    let days = days_since(input.repository.last_commit_date, now);
    let active_weeks = active_recent_weeks(input.commit_activity);

    if days >= INACTIVE_DAYS {
        breakdown.push(INACTIVE.to_string());
    } else if days >= STALE_DAYS {
        breakdown.push(STALE.to_string());
    } else if active_weeks == 0 {
        breakdown.push(NO_RECENT_WEEKS.to_string());
    }

    recency_points(days) + consistency_points(active_weeks)
}
