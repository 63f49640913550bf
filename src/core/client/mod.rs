//! Public client surface + builder.
//! Internals are split into `constants` (UA + defaults) and `retry` (opt-in retry policy).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::NbuError;
use constants::{DEFAULT_BASE_URL, EXCHANGE_ENDPOINT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Handle to the NBU exchange API.
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NbuClient {
    http: Client,
    base_url: Url,
    retry: RetryConfig,
}

impl Default for NbuClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NbuClient {
    /// Create a new builder.
    pub fn builder() -> NbuClientBuilder {
        NbuClientBuilder::default()
    }

    /// The statdirectory base this client queries.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn exchange_url(&self) -> Result<Url, NbuError> {
        Ok(self.base_url.join(EXCHANGE_ENDPOINT)?)
    }

    /// Sends a request, retrying per the effective policy.
    ///
    /// A non-2xx response is returned as-is once retries are exhausted so the
    /// caller can map it to [`NbuError::Status`].
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, NbuError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt = 0;

        loop {
            let Some(this_try) = req.try_clone() else {
                return Ok(req.send().await?);
            };

            let retries_left = cfg.enabled && attempt < cfg.max_retries;
            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if !retries_left || resp.status().is_success() || !cfg.should_retry_status(status) {
                        return Ok(resp);
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(status, attempt, url = %resp.url(), "retrying after status");
                }
                Err(e) => {
                    if !retries_left || !cfg.should_retry_error(&e) {
                        return Err(e.into());
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(error = %e, attempt, "retrying after transport error");
                }
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NbuClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl NbuClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the statdirectory base (e.g., `https://bank.gov.ua/NBUStatService/v1/statdirectory/`).
    ///
    /// Endpoint names are joined onto this URL, so it should end with `/`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the retry policy used by every request of this client. Default: no retries.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<NbuClient, NbuError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NbuClient {
            http,
            base_url,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
