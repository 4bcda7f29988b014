use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{ScrapeError, ScrapeResult};

/// Page fetcher for the source site.
///
/// A deliberately thin I/O boundary: one GET per call, no retry, no
/// caching, no rate limiting. Each call is independent.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: Client,
}

impl Fetcher {
    /// Create a new fetcher with the configured user agent and timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> ScrapeResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http })
    }

    /// Fetch one page and return its HTML text.
    ///
    /// # Errors
    /// Returns [`ScrapeError::Request`] on transport failure and
    /// [`ScrapeError::Fetch`] on a non-2xx response.
    pub async fn get(&self, url: &str) -> ScrapeResult<String> {
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        let fetcher = Fetcher::new(&Config::default());
        assert!(fetcher.is_ok());
    }
}
