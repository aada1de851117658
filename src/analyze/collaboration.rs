use super::ScoringInput;
use crate::types::scoring::Score;

const SOME_CONTRIBUTORS: usize = 1;
const MANY_CONTRIBUTORS: usize = 5;
const CONTRIBUTOR_POINTS: Score = 5;
const BUS_FACTOR_LIMIT: u8 = 50;
const BUS_FACTOR_POINTS: Score = 5;
const FORK_THRESHOLD: u64 = 5;
const FORK_POINTS: Score = 5;

pub const SINGLE_MAINTAINER: &str = "Single maintainer (Low bus factor)";

pub fn high_bus_factor_message(bus_factor: u8) -> String {
    format!("High bus factor: top contributor owns {bus_factor}% of contributions")
}

pub fn collaboration_score(input: &ScoringInput<'_>, breakdown: &mut Vec<String>) -> Score {
    let contributors = input.contributors.len();
    let mut score: Score = 0;

    if contributors > SOME_CONTRIBUTORS {
        score += CONTRIBUTOR_POINTS;
    }
    if contributors > MANY_CONTRIBUTORS {
        score += CONTRIBUTOR_POINTS;
    }

    if contributors == 1 {
        breakdown.push(SINGLE_MAINTAINER.to_string());
    } else if contributors > 1 {
        if input.bus_factor < BUS_FACTOR_LIMIT {
            score += BUS_FACTOR_POINTS;
        } else {
            breakdown.push(high_bus_factor_message(input.bus_factor));
        }
    }

    if input.repository.forks > FORK_THRESHOLD {
        score += FORK_POINTS;
    }
    score
}
