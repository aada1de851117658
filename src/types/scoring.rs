use serde::{Deserialize, Serialize};

pub type Score = u8;

pub const DOCUMENTATION_MAX: Score = 30;
pub const MAINTENANCE_MAX: Score = 30;
pub const COLLABORATION_MAX: Score = 20;
pub const BEGINNER_FRIENDLY_MAX: Score = 20;
pub const HEALTH_SCORE_MAX: Score = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub documentation: Score,
    pub maintenance: Score,
    pub collaboration: Score,
    pub beginner_friendly: Score,
}

impl SubScores {
    /// Caps each category at its maximum.
    pub fn new(
        documentation: Score,
        maintenance: Score,
        collaboration: Score,
        beginner_friendly: Score,
    ) -> Self {
        Self {
            documentation: documentation.min(DOCUMENTATION_MAX),
            maintenance: maintenance.min(MAINTENANCE_MAX),
            collaboration: collaboration.min(COLLABORATION_MAX),
            beginner_friendly: beginner_friendly.min(BEGINNER_FRIENDLY_MAX),
        }
    }

    pub fn total(&self) -> Score {
        let sum = u16::from(self.documentation)
            + u16::from(self.maintenance)
            + u16::from(self.collaboration)
            + u16::from(self.beginner_friendly);
        sum.min(u16::from(HEALTH_SCORE_MAX)) as Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_caps_each_category() {
        let scores = SubScores::new(45, 31, 25, 21);
        assert_eq!(scores.documentation, DOCUMENTATION_MAX);
        assert_eq!(scores.maintenance, MAINTENANCE_MAX);
        assert_eq!(scores.collaboration, COLLABORATION_MAX);
        assert_eq!(scores.beginner_friendly, BEGINNER_FRIENDLY_MAX);
        assert_eq!(scores.total(), 100);
    }

    #[test]
    fn total_sums_categories() {
        assert_eq!(SubScores::new(10, 5, 5, 0).total(), 20);
    }
}
