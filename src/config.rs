use std::{path::Path, time::Duration};

use confique::Config;
use url::Url;

#[derive(Config)]
pub struct AppConfig {
	#[config(nested)]
	pub upstream: UpstreamConfig,

	#[config(nested)]
	pub extract: ExtractConfig,
}

#[derive(Config)]
pub struct UpstreamConfig {
	/// Page republished by `/api/proxy/yahoo`.
	#[config(default = "https://www.yahoo.com")]
	pub homepage: Url,

	/// Listing scanned for headlines by `/api/proxy/yahoo/news`.
	#[config(default = "https://news.yahoo.com")]
	pub news: Url,

	#[config(default = "Yahoo")]
	pub site_name: String,

	#[config(default = "Yahoo Homepage")]
	pub homepage_title: String,

	#[config(default = "Yahoo News")]
	pub news_source: String,

	#[config(default = "Yahoo Proxy Server")]
	pub service_name: String,

	#[config(
		default = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
	)]
	pub user_agent: String,

	#[config(default = 10)]
	pub timeout_secs: u64,
}

#[derive(Config)]
pub struct ExtractConfig {
	#[config(default = 10)]
	pub max_headings: usize,

	#[config(default = 8)]
	pub max_articles: usize,

	/// Titles must be strictly longer than this many characters.
	#[config(default = 10)]
	pub min_title_chars: usize,
}

impl AppConfig {
	/// Loads settings from `path`, falling back to defaults when the file is absent.
	pub fn load(path: &Path) -> anyhow::Result<AppConfig> {
		Ok(Self::builder().file(path).load()?)
	}

	pub fn defaults() -> anyhow::Result<AppConfig> {
		Ok(Self::builder().load()?)
	}
}

impl UpstreamConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	/// The configured homepage as fetched, without a trailing slash.
	pub fn homepage_url(&self) -> String {
		self.homepage.as_str().trim_end_matches('/').to_string()
	}

	pub fn homepage_origin(&self) -> String {
		origin(&self.homepage)
	}

	pub fn news_origin(&self) -> String {
		origin(&self.news)
	}
}

/// `scheme://host[:port]` without a trailing slash, used as the rewrite base.
pub fn origin(url: &Url) -> String {
	url.origin().ascii_serialization()
}
