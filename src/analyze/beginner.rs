use super::ScoringInput;
use crate::types::report::FileChecks;
use crate::types::scoring::Score;

const CONTRIBUTING_POINTS: Score = 8;
const CODE_OF_CONDUCT_POINTS: Score = 4;
const DEPENDENCY_POINTS: Score = 4;
const OPEN_ISSUE_POINTS: Score = 4;
/// Open-issue counts at or above this look like an unmanaged backlog.
const OPEN_ISSUE_CEILING: u64 = 1000;

pub const MISSING_CONTRIBUTING: &str = "No CONTRIBUTING.md guideline found";

pub fn beginner_score(
    input: &ScoringInput<'_>,
    checks: &FileChecks,
    breakdown: &mut Vec<String>,
) -> Score {
    let mut score: Score = 0;

    if checks.has_contributing {
        score += CONTRIBUTING_POINTS;
    } else {
        breakdown.push(MISSING_CONTRIBUTING.to_string());
    }
    if checks.has_code_of_conduct {
        score += CODE_OF_CONDUCT_POINTS;
    }
    if input.dependencies.is_some() {
        score += DEPENDENCY_POINTS;
    }

    let open_issues = input.repository.open_issues;
    if open_issues > 0 && open_issues < OPEN_ISSUE_CEILING {
        score += OPEN_ISSUE_POINTS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::file_checks;
    use crate::analyze::tests::{base_input, Fixture};
    use crate::types::facts::CommunityProfile;

    fn score_for(fixture: &Fixture) -> (Score, Vec<String>) {
        let input = fixture.input();
        let checks = file_checks(&input);
        let mut breakdown = Vec::new();
        let score = beginner_score(&input, &checks, &mut breakdown);
        (score, breakdown)
    }

    #[test]
    fn welcoming_repository_scores_maximum() {
        let (score, breakdown) = score_for(&base_input());
        assert_eq!(score, 20);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn missing_contributing_guide_is_flagged() {
        let mut fixture = base_input();
        fixture.files.retain(|file| !file.to_lowercase().contains("contributing"));
        let (score, breakdown) = score_for(&fixture);
        assert_eq!(score, 12);
        assert_eq!(breakdown, vec![MISSING_CONTRIBUTING.to_string()]);
    }

    #[test]
    fn community_profile_stands_in_for_root_files() {
        let mut fixture = base_input();
        fixture.files = vec!["README.md".to_string()];
        fixture.community_profile = Some(CommunityProfile {
            health_percentage: 85,
            has_contributing: true,
            has_code_of_conduct: true,
            has_license: true,
        });
        let (score, breakdown) = score_for(&fixture);
        assert_eq!(score, 20);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn open_issue_range_is_bounded() {
        for (open_issues, expected) in [(0, 16), (1, 20), (999, 20), (1000, 16)] {
            let mut fixture = base_input();
            fixture.repository.open_issues = open_issues;
            assert_eq!(score_for(&fixture).0, expected, "open issues {open_issues}");
        }
    }

    #[test]
    fn missing_manifest_costs_dependency_points() {
        let mut fixture = base_input();
        fixture.dependencies = None;
        assert_eq!(score_for(&fixture).0, 16);
    }
}
