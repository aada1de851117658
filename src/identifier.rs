use crate::error::{RepoHealthError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const MAX_OWNER_LEN: usize = 39;

/// A validated `owner/name` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Accepts `https://github.com/OWNER/NAME`, `github.com/OWNER/NAME` or `OWNER/NAME`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let path = strip_host(trimmed);
        let mut parts = path.split('/');
        let (owner, name) = match (parts.next(), parts.next()) {
            (Some(owner), Some(name)) => (owner, name),
            _ => {
                return Err(RepoHealthError::InvalidInput(
                    "Invalid URL format. Expected github.com/owner/repo".to_string(),
                ))
            }
        };
        let name = name.strip_suffix(".git").unwrap_or(name);

        if !is_valid_owner(owner) {
            return Err(RepoHealthError::InvalidInput(
                "Invalid repository owner".to_string(),
            ));
        }
        if !is_valid_name(name) {
            return Err(RepoHealthError::InvalidInput(
                "Invalid repository name".to_string(),
            ));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn canonical_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn strip_host(input: &str) -> &str {
    let without_scheme = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"));
    let candidate = without_scheme.unwrap_or(input);
    let candidate = candidate.strip_prefix("www.").unwrap_or(candidate);
    match candidate.strip_prefix("github.com/") {
        Some(path) => path,
        None if without_scheme.is_some() => candidate,
        None => input,
    }
}

/// Alphanumerics and single inner hyphens, at most 39 characters.
fn is_valid_owner(owner: &str) -> bool {
    if owner.is_empty() || owner.len() > MAX_OWNER_LEN {
        return false;
    }
    if owner.starts_with('-') || owner.ends_with('-') || owner.contains("--") {
        return false;
    }
    owner
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

fn is_valid_name(name: &str) -> bool {
    static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern =
        NAME_PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]{1,100}$").expect("valid regex"));
    pattern.is_match(name) && name != "." && name != ".."
}
