mod error;
mod fetch_config;
mod fetch_result;
mod fetcher;
mod orchestrator;
mod report;
pub mod telemetry;
mod transport;
mod utils;

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
pub use error::FetchError;
pub use fetch_config::{FetchConfig, MAX_CONCURRENCY_ENV};
pub use fetch_result::FetchResult;
pub use fetcher::fetch;
pub use orchestrator::run;
pub use report::write_report;
pub use reqwest;
use reqwest::{Client, ClientBuilder, Url};
use std::collections::HashMap;
pub use transport::Transport;
use utils::map_to_reqwest_headers;

pub type FetchHeaders = HashMap<String, String>;
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The reqwest-backed [`Transport`].
///
/// Only the headers of a [`FetchConfig`] concern the client; the concurrency
/// limit is applied by [`run`].
#[derive(Debug)]
pub struct Fetch {
    client: Client,
    /// Headers sent with every request, including the user agent
    pub headers: FetchHeaders,
}

impl Fetch {
    /// Creates a new instance of Fetch with optional configuration
    ///
    /// # Example
    /// ```rust
    /// use fetch_sizes::Fetch;
    /// let client = Fetch::new(None);
    /// assert_ne!(true, client.is_err());
    ///
    /// ```
    pub fn new(config: Option<FetchConfig>) -> Result<Self, FetchError> {
        let mut headers = config
            .and_then(|config| config.headers)
            .unwrap_or_default();
        Self::insert_default_headers(&mut headers);

        let client = ClientBuilder::default()
            .default_headers(map_to_reqwest_headers(&headers)?)
            .build()
            .map_err(|e| FetchError::Unknown(anyhow!(e)))?;

        Ok(Self { client, headers })
    }

    fn insert_default_headers(headers: &mut FetchHeaders) {
        headers.insert(
            reqwest::header::USER_AGENT.to_string(),
            USER_AGENT.to_string(),
        );
    }
}

#[async_trait]
impl Transport for Fetch {
    /// Sends an HTTP GET request and reads the whole body.
    ///
    /// The response is released when this returns, whether the body was read
    /// or not. Non-2xx statuses are not errors.
    async fn get(&self, url: &str) -> Result<Bytes, FetchError> {
        let url: Url = url
            .parse()
            .map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::UnableToSendRequest { err })?;
        tracing::trace!(url = %response.url(), status = %response.status(), "response received");

        response
            .bytes()
            .await
            .map_err(|err| FetchError::UnableToReadBody { err })
    }
}
