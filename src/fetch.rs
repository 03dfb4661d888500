use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
	#[error("could not build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("request to {url} timed out after {}s", .timeout.as_secs_f32())]
	Timeout { url: Url, timeout: Duration },
	#[error("{url} answered {status}")]
	Status { url: Url, status: StatusCode },
	#[error("request to {url} failed: {source}")]
	Network {
		url: Url,
		#[source]
		source: reqwest::Error,
	},
}

/// Single-shot HTTP GET against the upstream site.
#[derive(Clone, Debug)]
pub struct Fetcher {
	client: Client,
	timeout: Duration,
}

impl Fetcher {
	pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
		let client = Client::builder()
			.user_agent(user_agent)
			.timeout(timeout)
			.build()
			.map_err(FetchError::Client)?;

		Ok(Self { client, timeout })
	}

	/// Fetches `url` and returns the body as text. Any non-2xx status is an error.
	#[tracing::instrument(name = "fetch", skip_all, fields(url = %url))]
	pub async fn get(&self, url: &Url) -> Result<String, FetchError> {
		tracing::info!("HTTP GET {url}");

		let response = self
			.client
			.get(url.clone())
			.send()
			.await
			.map_err(|e| self.classify(url, e))?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				url: url.clone(),
				status,
			});
		}

		response.text().await.map_err(|e| self.classify(url, e))
	}

	fn classify(&self, url: &Url, source: reqwest::Error) -> FetchError {
		if source.is_timeout() {
			FetchError::Timeout {
				url: url.clone(),
				timeout: self.timeout,
			}
		} else {
			FetchError::Network {
				url: url.clone(),
				source,
			}
		}
	}
}
