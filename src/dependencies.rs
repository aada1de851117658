//! Dependency Sniffer: finds the first known manifest in the root listing and
//! produces a best-effort dependency count for it.

use crate::gateway::RepoDataSource;
use crate::identifier::RepoId;
use crate::types::facts::DependencySummary;
use serde::Deserialize;
use serde_json::Map;
use std::collections::BTreeSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Npm,
    Pip,
    Go,
    Cargo,
    Bundler,
    Composer,
    Maven,
}

impl Ecosystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pip => "pip",
            Self::Go => "go",
            Self::Cargo => "cargo",
            Self::Bundler => "bundler",
            Self::Composer => "composer",
            Self::Maven => "maven",
        }
    }
}

/// Manifest precedence; the first entry present in the listing wins.
pub const MANIFESTS: [(&str, Ecosystem); 7] = [
    ("package.json", Ecosystem::Npm),
    ("requirements.txt", Ecosystem::Pip),
    ("go.mod", Ecosystem::Go),
    ("Cargo.toml", Ecosystem::Cargo),
    ("Gemfile", Ecosystem::Bundler),
    ("composer.json", Ecosystem::Composer),
    ("pom.xml", Ecosystem::Maven),
];

pub fn detect_manifest(files: &[String]) -> Option<(&'static str, Ecosystem)> {
    MANIFESTS
        .iter()
        .copied()
        .find(|(manifest, _)| files.iter().any(|file| file == manifest))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NpmManifest {
    #[serde(default)]
    dependencies: Option<Map<String, serde_json::Value>>,
    #[serde(default)]
    dev_dependencies: Option<Map<String, serde_json::Value>>,
}

/// Ecosystem-specific count. `None` means the manifest could not be parsed.
pub fn count_dependencies(ecosystem: Ecosystem, content: &str) -> Option<usize> {
    match ecosystem {
        Ecosystem::Npm => {
            let manifest: NpmManifest = serde_json::from_str(content).ok()?;
            let names: BTreeSet<&String> = manifest
                .dependencies
                .iter()
                .chain(manifest.dev_dependencies.iter())
                .flat_map(|section| section.keys())
                .collect();
            Some(names.len())
        }
        Ecosystem::Pip => Some(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .count(),
        ),
        // Rough proxy: multi-line require blocks count once.
        Ecosystem::Go => Some(
            content
                .lines()
                .filter(|line| line.contains("require"))
                .count(),
        ),
        _ => Some(content.lines().count()),
    }
}

pub async fn sniff_dependencies<S: RepoDataSource + ?Sized>(
    source: &S,
    repo: &RepoId,
    files: &[String],
) -> Option<DependencySummary> {
    let (file, ecosystem) = detect_manifest(files)?;
    let content = source.fetch_file_content(repo, file).await;

    let count = match content.as_deref() {
        Some(text) if !text.trim().is_empty() => {
            count_dependencies(ecosystem, text).unwrap_or_else(|| {
                warn!(manifest = file, "failed to parse dependency manifest");
                0
            })
        }
        _ => {
            debug!(manifest = file, "dependency manifest content unavailable");
            0
        }
    };

    Some(DependencySummary {
        count,
        manager: ecosystem.as_str().to_string(),
        file: file.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::gateway::BoxFuture;
    use crate::types::facts::{
        CommitActivity, CommunityProfile, Contributor, FileListing, LanguageBytes,
        RepositoryFacts,
    };
    use std::collections::HashMap;

    struct ContentOnly {
        files: HashMap<&'static str, &'static str>,
    }

    impl RepoDataSource for ContentOnly {
        fn fetch_repository<'a>(
            &'a self,
            repo: &'a RepoId,
        ) -> BoxFuture<'a, Result<RepositoryFacts>> {
            Box::pin(async move {
                Err(crate::error::RepoHealthError::RepositoryNotFound(
                    repo.to_string(),
                ))
            })
        }
        fn fetch_contributors<'a>(&'a self, _: &'a RepoId) -> BoxFuture<'a, Vec<Contributor>> {
            Box::pin(async { Vec::new() })
        }
        fn fetch_file_listing<'a>(
            &'a self,
            _: &'a RepoId,
            _: &'a str,
        ) -> BoxFuture<'a, FileListing> {
            Box::pin(async { Vec::new() })
        }
        fn fetch_readme<'a>(&'a self, _: &'a RepoId) -> BoxFuture<'a, Option<String>> {
            Box::pin(async { None })
        }
        fn fetch_commit_activity<'a>(&'a self, _: &'a RepoId) -> BoxFuture<'a, CommitActivity> {
            Box::pin(async { Vec::new() })
        }
        fn fetch_languages<'a>(&'a self, _: &'a RepoId) -> BoxFuture<'a, LanguageBytes> {
            Box::pin(async { LanguageBytes::new() })
        }
        fn fetch_community_profile<'a>(
            &'a self,
            _: &'a RepoId,
        ) -> BoxFuture<'a, Option<CommunityProfile>> {
            Box::pin(async { None })
        }
        fn fetch_file_content<'a>(
            &'a self,
            _: &'a RepoId,
            path: &'a str,
        ) -> BoxFuture<'a, Option<String>> {
            let content = self.files.get(path).map(|text| text.to_string());
            Box::pin(async move { content })
        }
    }

    fn listing(files: &[&str]) -> Vec<String> {
        files.iter().map(|file| file.to_string()).collect()
    }

    fn repo() -> RepoId {
        RepoId::parse("octo/demo").expect("valid identifier")
    }

    #[test]
    fn detect_manifest_follows_table_order() {
        let files = listing(&["requirements.txt", "README.md", "package.json"]);
        assert_eq!(
            detect_manifest(&files),
            Some(("package.json", Ecosystem::Npm))
        );
        assert_eq!(
            detect_manifest(&listing(&["pom.xml", "Gemfile"])),
            Some(("Gemfile", Ecosystem::Bundler))
        );
        assert!(detect_manifest(&listing(&["README.md", "src"])).is_none());
    }

    #[test]
    fn detect_manifest_requires_exact_root_name() {
        assert!(detect_manifest(&listing(&["frontend/package.json", "Package.JSON"])).is_none());
    }

    #[test]
    fn npm_counts_dependencies_and_dev_dependencies() {
        let manifest = r#"{
            "name": "demo",
            "dependencies": {"react": "^18", "react-dom": "^18", "zod": "^3"},
            "devDependencies": {"vitest": "^1", "typescript": "^5"}
        }"#;
        assert_eq!(count_dependencies(Ecosystem::Npm, manifest), Some(5));
    }

    #[test]
    fn npm_counts_shared_names_once() {
        let manifest = r#"{
            "dependencies": {"react": "^18"},
            "devDependencies": {"react": "^18", "vitest": "^1"}
        }"#;
        assert_eq!(count_dependencies(Ecosystem::Npm, manifest), Some(2));
    }

    #[test]
    fn npm_treats_null_sections_as_empty() {
        let manifest = r#"{"dependencies": null, "devDependencies": {"a": "1", "b": "1"}}"#;
        assert_eq!(count_dependencies(Ecosystem::Npm, manifest), Some(2));
        let manifest = r#"{"dependencies": {"a": "1"}, "devDependencies": null}"#;
        assert_eq!(count_dependencies(Ecosystem::Npm, manifest), Some(1));
        assert_eq!(count_dependencies(Ecosystem::Npm, "{}"), Some(0));
    }

    #[test]
    fn npm_rejects_malformed_json() {
        assert_eq!(count_dependencies(Ecosystem::Npm, "{ not json"), None);
    }

    #[test]
    fn pip_skips_blank_and_comment_lines() {
        let requirements = "# web\nflask==2.0\n\n  requests>=2\n# pinned\nnumpy\n";
        assert_eq!(count_dependencies(Ecosystem::Pip, requirements), Some(3));
    }

    #[test]
    fn go_counts_require_lines() {
        let go_mod = "module example.com/demo\n\ngo 1.22\n\nrequire github.com/a/b v1.0.0\nrequire (\n\tgithub.com/c/d v1.2.0\n)\n";
        assert_eq!(count_dependencies(Ecosystem::Go, go_mod), Some(2));
    }

    #[test]
    fn other_ecosystems_use_line_count() {
        let cargo = "[package]\nname = \"demo\"\n\n[dependencies]\nserde = \"1\"\n";
        assert_eq!(count_dependencies(Ecosystem::Cargo, cargo), Some(5));
    }

    #[tokio::test]
    async fn sniff_prefers_npm_over_pip() {
        let source = ContentOnly {
            files: HashMap::from([
                (
                    "package.json",
                    r#"{"dependencies": {"a": "1", "b": "1", "c": "1"}, "devDependencies": {"d": "1", "e": "1"}}"#,
                ),
                ("requirements.txt", "flask\n"),
            ]),
        };
        let summary = sniff_dependencies(
            &source,
            &repo(),
            &listing(&["requirements.txt", "package.json"]),
        )
        .await
        .expect("manifest should be detected");

        assert_eq!(
            summary,
            DependencySummary {
                count: 5,
                manager: "npm".to_string(),
                file: "package.json".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn sniff_degrades_to_zero_when_content_missing_or_malformed() {
        let missing = ContentOnly {
            files: HashMap::new(),
        };
        let summary = sniff_dependencies(&missing, &repo(), &listing(&["go.mod"]))
            .await
            .expect("manifest should be detected");
        assert_eq!(summary.count, 0);
        assert_eq!(summary.manager, "go");

        let malformed = ContentOnly {
            files: HashMap::from([("package.json", "{\"dependencies\": [")]),
        };
        let summary = sniff_dependencies(&malformed, &repo(), &listing(&["package.json"]))
            .await
            .expect("manifest should be detected");
        assert_eq!(summary.count, 0);
        assert_eq!(summary.file, "package.json");
    }

    #[tokio::test]
    async fn sniff_returns_none_without_manifest() {
        let source = ContentOnly {
            files: HashMap::new(),
        };
        assert!(sniff_dependencies(&source, &repo(), &listing(&["README.md"]))
            .await
            .is_none());
    }
}
