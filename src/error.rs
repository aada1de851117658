use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoHealthError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Repository not found (or private): {0}")]
    RepositoryNotFound(String),

    #[error("API rate limit exceeded.")]
    RateLimitExceeded,

    #[error("GitHub API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RepoHealthError {
    /// HTTP-like status class for fatal failures.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::RepositoryNotFound(_) => 404,
            Self::RateLimitExceeded => 429,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepoHealthError>;
