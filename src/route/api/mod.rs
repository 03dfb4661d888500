use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use strum::{EnumIter, EnumProperty, IntoEnumIterator, IntoStaticStr};

use crate::{
	app::AppState,
	config::UpstreamConfig,
	page::{Article, extract_articles, sanitise},
	route::{Payload, Proxied},
};

/// Sent in place of the homepage when upstream cannot be reached.
pub fn fallback_content(site_name: &str) -> String {
	format!(
		r#"<div style="padding: 20px; text-align: center;"><h2>Unable to load {site_name} content</h2><p>The proxy server could not fetch the {site_name} homepage.</p></div>"#
	)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, IntoStaticStr, EnumProperty)]
pub enum Endpoint {
	#[strum(serialize = "/api/proxy/yahoo", props(about = "Yahoo homepage"))]
	Homepage,
	#[strum(serialize = "/api/proxy/yahoo/news", props(about = "Yahoo news articles"))]
	News,
	#[strum(serialize = "/api/status", props(about = "This status endpoint"))]
	Status,
}

impl Endpoint {
	pub fn path(self) -> &'static str {
		self.into()
	}

	fn listing(self) -> String {
		format!("{} - {}", self.path(), self.get_str("about").unwrap_or_default())
	}
}

#[derive(Serialize, Debug)]
pub struct PageContent {
	pub content: String,
	pub title: String,
	pub url: String,
}

#[derive(Serialize, Debug)]
pub struct PageFallback {
	content: String,
}

impl Payload for PageContent {
	type Fallback = PageFallback;

	fn fallback(upstream: &UpstreamConfig) -> PageFallback {
		PageFallback {
			content: fallback_content(&upstream.site_name),
		}
	}
}

#[derive(Serialize, Debug)]
pub struct NewsFeed {
	pub articles: Vec<Article>,
	pub source: String,
}

#[derive(Serialize, Debug)]
pub struct NewsFallback {
	articles: Vec<Article>,
}

impl Payload for NewsFeed {
	type Fallback = NewsFallback;

	fn fallback(_: &UpstreamConfig) -> NewsFallback {
		NewsFallback {
			articles: Vec::new(),
		}
	}
}

#[derive(Serialize, Debug)]
pub struct ServiceStatus {
	status: &'static str,
	service: String,
	endpoints: Vec<String>,
}

#[tracing::instrument(name = "homepage_handler", skip_all)]
async fn homepage(State(state): State<AppState>) -> Proxied<PageContent> {
	let upstream = &state.config.upstream;

	match state.fetcher.get(&upstream.homepage).await {
		Ok(html) => Proxied::Ok(PageContent {
			content: sanitise(&html, &upstream.homepage_origin()),
			title: upstream.homepage_title.clone(),
			url: upstream.homepage_url(),
		}),
		Err(e) => {
			tracing::error!("{e}");
			Proxied::failed(
				format!("Failed to fetch {} content: {e}", upstream.site_name),
				upstream,
			)
		}
	}
}

#[tracing::instrument(name = "news_handler", skip_all)]
async fn news(State(state): State<AppState>) -> Proxied<NewsFeed> {
	let upstream = &state.config.upstream;

	match state.fetcher.get(&upstream.news).await {
		Ok(html) => Proxied::Ok(NewsFeed {
			articles: extract_articles(&html, &upstream.news_origin(), &state.config.extract),
			source: upstream.news_source.clone(),
		}),
		Err(e) => {
			tracing::error!("{e}");
			Proxied::failed(
				format!("Failed to fetch {}: {e}", upstream.news_source),
				upstream,
			)
		}
	}
}

async fn status(State(state): State<AppState>) -> Json<ServiceStatus> {
	Json(ServiceStatus {
		status: "running",
		service: state.config.upstream.service_name.clone(),
		endpoints: Endpoint::iter().map(Endpoint::listing).collect(),
	})
}

pub fn router() -> Router<AppState> {
	Router::new()
		.route(Endpoint::Homepage.path(), get(homepage))
		.route(Endpoint::News.path(), get(news))
		.route(Endpoint::Status.path(), get(status))
}
