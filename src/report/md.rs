use crate::types::report::RepoAnalysis;
use crate::types::scoring::{
    BEGINNER_FRIENDLY_MAX, COLLABORATION_MAX, DOCUMENTATION_MAX, HEALTH_SCORE_MAX,
    MAINTENANCE_MAX,
};

fn check_mark(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

pub fn to_markdown(analysis: &RepoAnalysis) -> String {
    let details = &analysis.details;
    let health = &analysis.health;
    let mut output = String::new();

    output.push_str(&format!(
        "# Repository Health: {}/{}\n\n",
        details.owner, details.name
    ));
    if let Some(description) = details.description.as_deref() {
        output.push_str(&format!("{description}\n\n"));
    }
    output.push_str(&format!("URL: {}\n\n", analysis.url));
    output.push_str(&format!(
        "Health score: {}/{}\n\nVerdict: {}\n\n",
        health.health_score, HEALTH_SCORE_MAX, health.verdict
    ));

    output.push_str("## Sub-scores\n\n");
    output.push_str(&format!(
        "- documentation: {}/{}\n- maintenance: {}/{}\n- collaboration: {}/{}\n- beginner friendliness: {}/{}\n\n",
        health.sub_scores.documentation,
        DOCUMENTATION_MAX,
        health.sub_scores.maintenance,
        MAINTENANCE_MAX,
        health.sub_scores.collaboration,
        COLLABORATION_MAX,
        health.sub_scores.beginner_friendly,
        BEGINNER_FRIENDLY_MAX
    ));

    output.push_str("## Issues\n\n");
    if health.breakdown.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for message in &health.breakdown {
            output.push_str(&format!("- {message}\n"));
        }
        output.push('\n');
    }

    let checks = &health.file_checks;
    output.push_str("## Files\n\n");
    output.push_str(&format!(
        "- README: {} ({} bytes)\n- license: {}\n- contributing guide: {}\n- code of conduct: {}\n- security policy: {}\n\n",
        check_mark(checks.has_readme),
        checks.readme_size,
        details
            .license
            .as_ref()
            .map(|license| license.name.as_str())
            .unwrap_or(check_mark(checks.has_license)),
        check_mark(checks.has_contributing),
        check_mark(checks.has_code_of_conduct),
        check_mark(checks.has_security)
    ));

    output.push_str("## Activity\n\n");
    output.push_str(&format!(
        "- last commit: {}{}\n- commits in the last year: {}\n- average commits per week: {:.2}\n- contributors: {}\n- bus factor: {}%\n- stars: {}\n- forks: {}\n- open issues: {}\n",
        details.last_commit_date.format("%Y-%m-%d"),
        if details.last_commit_estimated {
            " (estimated from last update)"
        } else {
            ""
        },
        analysis.commit_summary.total_last_year,
        analysis.commit_summary.frequency,
        analysis.contributors_count,
        analysis.bus_factor,
        details.stars,
        details.forks,
        details.open_issues
    ));
    if let Some(community) = analysis.community_health {
        output.push_str(&format!("- community health: {community}%\n"));
    }
    output.push('\n');

    output.push_str("## Languages\n\n");
    let total_bytes: u64 = analysis.languages.values().sum();
    if total_bytes == 0 {
        output.push_str("- unknown\n\n");
    } else {
        let mut languages: Vec<_> = analysis.languages.iter().collect();
        languages.sort_by(|left, right| right.1.cmp(left.1).then_with(|| left.0.cmp(right.0)));
        for (language, bytes) in languages {
            let share = *bytes as f64 / total_bytes as f64 * 100.0;
            output.push_str(&format!("- {language}: {share:.1}%\n"));
        }
        output.push('\n');
    }

    output.push_str("## Dependencies\n\n");
    match &analysis.dependencies {
        Some(summary) => output.push_str(&format!(
            "- {} dependencies via {} ({})\n",
            summary.count, summary.manager, summary.file
        )),
        None => output.push_str("- no known manifest\n"),
    }

    if !details.topics.is_empty() {
        output.push_str(&format!("\nTopics: {}\n", details.topics.join(", ")));
    }

    output
}
