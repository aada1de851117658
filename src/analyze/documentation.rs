use super::ScoringInput;
use crate::types::report::FileChecks;
use crate::types::scoring::Score;
use regex::Regex;
use std::sync::OnceLock;

const README_POINTS: Score = 5;
const README_LENGTH_POINTS: Score = 5;
const README_LONG_CHARS: usize = 1000;
const SETUP_SECTION_POINTS: Score = 5;
const CONTRIBUTING_SECTION_POINTS: Score = 5;
const LICENSE_POINTS: Score = 10;
const SPARSE_THRESHOLD: Score = 10;

pub const MISSING_README: &str = "Missing README.md";
pub const MISSING_LICENSE: &str = "Missing License file";
pub const SPARSE_DOCUMENTATION: &str = "Poor documentation quality";

fn setup_heading() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?im)^[ ]{0,3}#+[ \t]+(setup|install|getting[ \t_-]*started|quick[ \t-]*start)")
            .expect("valid regex")
    })
}

fn contributing_heading() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?im)^[ ]{0,3}#+[ \t]+(contributing|contribute|development)")
            .expect("valid regex")
    })
}

pub fn documentation_score(
    input: &ScoringInput<'_>,
    checks: &FileChecks,
    breakdown: &mut Vec<String>,
) -> Score {
    let mut score: Score = 0;

    match input.readme.filter(|_| checks.has_readme) {
        Some(readme) => {
            score += README_POINTS;
            if readme.chars().count() > README_LONG_CHARS {
                score += README_LENGTH_POINTS;
            }
            if setup_heading().is_match(readme) {
                score += SETUP_SECTION_POINTS;
            }
            if contributing_heading().is_match(readme) {
                score += CONTRIBUTING_SECTION_POINTS;
            }
        }
        None => breakdown.push(MISSING_README.to_string()),
    }

    if checks.has_license {
        score += LICENSE_POINTS;
    } else {
        breakdown.push(MISSING_LICENSE.to_string());
    }

    if score < SPARSE_THRESHOLD {
        breakdown.push(SPARSE_DOCUMENTATION.to_string());
    }
    score
}
