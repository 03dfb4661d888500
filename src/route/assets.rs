use std::{
	io,
	path::{Path, PathBuf},
};

use axum::{
	Router,
	extract::Request,
	http::{HeaderValue, Method, StatusCode, header},
	middleware::{self, Next},
	response::{IntoResponse, Response},
};
use thiserror::Error;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

static APPLICATION_WASM: HeaderValue = HeaderValue::from_static("application/wasm");
static APPLICATION_JAVASCRIPT: HeaderValue = HeaderValue::from_static("application/javascript");

#[derive(Debug, Error)]
pub enum StartupError {
	#[error("cannot open {}: {source}", .path.display())]
	Root {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("index.html not found in {}", .0.display())]
	MissingIndex(PathBuf),
}

/// Directory served by the static surface. Only exists if it holds an `index.html`.
#[derive(Clone, Debug)]
pub struct SiteRoot(PathBuf);

impl SiteRoot {
	pub fn open(dir: &Path) -> Result<Self, StartupError> {
		let root = dir.canonicalize().map_err(|source| StartupError::Root {
			path: dir.to_path_buf(),
			source,
		})?;

		if !root.join("index.html").is_file() {
			return Err(StartupError::MissingIndex(root));
		}

		Ok(Self(root))
	}

	pub fn path(&self) -> &Path {
		&self.0
	}
}

fn forced_content_type(path: &str) -> Option<&'static HeaderValue> {
	if path.ends_with(".wasm") {
		Some(&APPLICATION_WASM)
	} else if path.ends_with(".js") || path.ends_with(".mjs") {
		Some(&APPLICATION_JAVASCRIPT)
	} else {
		None
	}
}

async fn content_type(request: Request, next: Next) -> Response {
	let forced = forced_content_type(request.uri().path());
	let mut response = next.run(request).await;

	if let Some(value) = forced {
		if response.status().is_success() {
			response
				.headers_mut()
				.insert(header::CONTENT_TYPE, value.clone());
		}
	}

	response
}

async fn preflight(request: Request, next: Next) -> Response {
	if request.method() == Method::OPTIONS {
		return StatusCode::OK.into_response();
	}

	next.run(request).await
}

/// Files below `root`; unknown paths fall through to a 404.
pub fn router(root: &SiteRoot) -> Router {
	Router::new()
		.fallback_service(ServeDir::new(root.path()))
		.layer(middleware::from_fn(content_type))
}

/// Answers every `OPTIONS` request with an empty 200 and stamps the
/// cross-origin header set on every response, preflights included.
pub fn cross_origin(router: Router) -> Router {
	let headers = [
		(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
		(header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
		(header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
		(
			header::HeaderName::from_static("cross-origin-embedder-policy"),
			"require-corp",
		),
		(
			header::HeaderName::from_static("cross-origin-opener-policy"),
			"same-origin",
		),
	];

	headers.into_iter().fold(
		router.layer(middleware::from_fn(preflight)),
		|router, (name, value)| {
			router.layer(SetResponseHeaderLayer::overriding(
				name,
				HeaderValue::from_static(value),
			))
		},
	)
}
