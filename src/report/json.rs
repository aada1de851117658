use crate::types::report::RepoAnalysis;

pub fn to_json(analysis: &RepoAnalysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analysis)
}
