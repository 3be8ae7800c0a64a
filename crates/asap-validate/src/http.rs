//! # HTTP Fetcher
//!
//! Production [`XmlFetcher`] backed by `reqwest`. Wraps a single
//! `reqwest::Client` that is safe to share across concurrent validation
//! calls.
//!
//! ## Error Mapping
//!
//! | Condition | Error |
//! |-----------|-------|
//! | URL does not parse | [`FetchError::InvalidUrl`] |
//! | Timeout (sending or reading the body) | [`FetchError::Timeout`] |
//! | Connection/protocol failure | [`FetchError::Transport`] |
//! | Non-2xx status | [`FetchError::Status`] with a body excerpt |
//! | Body not readable as text | [`FetchError::Body`] |
//!
//! Retries are NOT built in. Callers own retry policy.

use std::time::Duration;

use url::Url;

use crate::config::{ConfigError, HttpFetcherConfig};
use crate::error::FetchError;
use crate::traits::{BoxFuture, CollaboratorError, XmlFetcher};

/// Longest body excerpt carried by [`FetchError::Status`].
const BODY_EXCERPT_LEN: usize = 512;

/// Fetches OSCAL XML over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher from configuration.
    pub fn new(config: HttpFetcherConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(ConfigError::Client)?;
        Ok(Self { client })
    }

    /// Create a fetcher configured from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(HttpFetcherConfig::from_env()?)
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(url, "fetching OSCAL XML");

        let resp = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| request_error(url, e, |url, source| FetchError::Transport { url, source }))?;

        let status = resp.status();
        if !status.is_success() {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(url, status = status.as_u16(), error = %e, "error response body unreadable");
                    String::new()
                }
            };
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        resp.text()
            .await
            .map_err(|e| request_error(url, e, |url, source| FetchError::Body { url, source }))
    }
}

/// Map a reqwest failure, splitting out timeouts. The client timeout
/// spans the body read too, so both phases go through here.
fn request_error(
    url: &str,
    err: reqwest::Error,
    otherwise: impl FnOnce(String, CollaboratorError) -> FetchError,
) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            source: Box::new(err),
        }
    } else {
        otherwise(url.to_string(), Box::new(err))
    }
}

impl XmlFetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>> {
        Box::pin(self.fetch_text(url))
    }
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_keeps_short_bodies() {
        assert_eq!(excerpt("Not Found"), "Not Found");
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let body = "é".repeat(BODY_EXCERPT_LEN + 10);
        let cut = excerpt(&body);
        assert_eq!(cut.chars().count(), BODY_EXCERPT_LEN + 1);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn invalid_user_agent_keeps_client_error_as_source() {
        let config = HttpFetcherConfig {
            user_agent: "asap\nvalidate".to_string(),
            ..HttpFetcherConfig::default()
        };
        let err = HttpFetcher::new(config).unwrap_err();
        assert!(matches!(err, ConfigError::Client(_)));
        assert_eq!(err.to_string(), "failed to build HTTP client");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn rejects_unparseable_url_before_sending() {
        let fetcher = HttpFetcher::new(HttpFetcherConfig::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { url, .. } if url == "not a url"));
    }
}
