use crate::types::facts::Contributor;

/// Share of all contributions held by the top contributor, as a rounded
/// percentage. Higher means more concentration risk.
pub fn bus_factor(contributors: &[Contributor]) -> u8 {
    let Some(top) = contributors.first() else {
        return 0;
    };
    let total: u64 = contributors
        .iter()
        .map(|contributor| contributor.contributions)
        .sum();
    if total == 0 {
        return 0;
    }
    let share = (top.contributions as f64 / total as f64 * 100.0).round();
    share.clamp(0.0, 100.0) as u8
}
