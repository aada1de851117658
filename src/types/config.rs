use crate::error::RepoHealthError;
use crate::report::OutputFormat;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "repohealth";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONTRIBUTORS_PER_PAGE: u8 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoHealthConfig {
    pub github: Option<GitHubConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubConfig {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub contributors_per_page: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

/// Settings handed to the gateway constructor.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub contributors_per_page: u8,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            contributors_per_page: DEFAULT_CONTRIBUTORS_PER_PAGE,
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("contributors_per_page", &self.contributors_per_page)
            .finish()
    }
}

impl RepoHealthConfig {
    pub fn gateway(&self) -> GatewayConfig {
        let defaults = GatewayConfig::default();
        match &self.github {
            Some(github) => GatewayConfig {
                api_url: github.api_url.clone().unwrap_or(defaults.api_url),
                token: github
                    .token
                    .clone()
                    .filter(|token| !token.trim().is_empty()),
                user_agent: github.user_agent.clone().unwrap_or(defaults.user_agent),
                timeout_secs: github.timeout_secs.unwrap_or(defaults.timeout_secs),
                contributors_per_page: github
                    .contributors_per_page
                    .unwrap_or(defaults.contributors_per_page),
            },
            None => defaults,
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn validate(&self) -> Result<(), RepoHealthError> {
        self.gateway().validate()
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), RepoHealthError> {
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(RepoHealthError::ConfigParse(format!(
                "github.api_url must be an http(s) URL (found {})",
                self.api_url
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(RepoHealthError::ConfigParse(
                "github.user_agent cannot be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(RepoHealthError::ConfigParse(
                "github.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !(1..=100).contains(&self.contributors_per_page) {
            return Err(RepoHealthError::ConfigParse(
                "github.contributors_per_page must be between 1 and 100".to_string(),
            ));
        }
        Ok(())
    }
}
