#![allow(dead_code)]

use axum::{
	Router,
	body::{Body, to_bytes},
	http::{HeaderMap, Method, Request, StatusCode},
};
use pageproxy::{app::AppState, config::AppConfig};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Nothing listens on port 1, so connections are refused straight away.
pub const UNREACHABLE: &str = "http://127.0.0.1:1/";

pub struct Reply {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Vec<u8>,
}

impl Reply {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}

	pub fn json(&self) -> anyhow::Result<serde_json::Value> {
		Ok(serde_json::from_slice(&self.body)?)
	}
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn upstream(router: Router) -> anyhow::Result<String> {
	let listener = TcpListener::bind("127.0.0.1:0").await?;
	let addr = listener.local_addr()?;
	tokio::spawn(async move { axum::serve(listener, router).await });

	Ok(format!("http://{addr}"))
}

pub fn state(homepage: &str, news: &str) -> anyhow::Result<AppState> {
	let mut config = AppConfig::defaults()?;
	config.upstream.homepage = homepage.parse()?;
	config.upstream.news = news.parse()?;
	config.upstream.timeout_secs = 2;

	Ok(AppState::new(config)?)
}

pub async fn send(app: Router, method: Method, uri: &str) -> anyhow::Result<Reply> {
	let request = Request::builder()
		.method(method)
		.uri(uri)
		.header("origin", "http://localhost:5000")
		.body(Body::empty())?;

	let response = app.oneshot(request).await?;
	let status = response.status();
	let headers = response.headers().clone();
	let body = to_bytes(response.into_body(), usize::MAX).await?.to_vec();

	Ok(Reply {
		status,
		headers,
		body,
	})
}

pub async fn get(app: Router, uri: &str) -> anyhow::Result<Reply> {
	send(app, Method::GET, uri).await
}
