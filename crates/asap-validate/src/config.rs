//! HTTP fetcher configuration.
//!
//! Defaults suit fetching public OSCAL XML documents. Override via
//! environment variables or explicit construction for testing.

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("asap-validate/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`HttpFetcher`](crate::HttpFetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFetcherConfig {
    /// Request timeout in seconds, covering connect through body read.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpFetcherConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `ASAP_FETCH_TIMEOUT_SECS` (default: 30, must be a positive integer)
    /// - `ASAP_FETCH_USER_AGENT` (default: `asap-validate/<version>`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("ASAP_FETCH_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "ASAP_FETCH_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
        };

        let user_agent = lookup("ASAP_FETCH_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            timeout_secs,
            user_agent,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}
