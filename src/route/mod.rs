use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::config::UpstreamConfig;

pub mod api;
pub mod assets;

pub use api::router as api;
pub use assets::router as assets;

/// A payload republished from upstream, with the body sent in its place on failure.
pub trait Payload: Serialize {
	type Fallback: Serialize;

	fn fallback(upstream: &UpstreamConfig) -> Self::Fallback;
}

/// Outcome of a proxied request, rendered as `{success, [error], ...}`.
pub enum Proxied<T: Payload> {
	Ok(T),
	Err { error: String, fallback: T::Fallback },
}

impl<T: Payload> Proxied<T> {
	pub fn failed(error: String, upstream: &UpstreamConfig) -> Self {
		Self::Err {
			error,
			fallback: T::fallback(upstream),
		}
	}
}

#[derive(Serialize)]
struct Envelope<P> {
	success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
	#[serde(flatten)]
	payload: P,
}

impl<T: Payload> IntoResponse for Proxied<T> {
	fn into_response(self) -> Response {
		match self {
			Self::Ok(payload) => Json(Envelope {
				success: true,
				error: None,
				payload,
			})
			.into_response(),
			Self::Err { error, fallback } => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(Envelope {
					success: false,
					error: Some(error),
					payload: fallback,
				}),
			)
				.into_response(),
		}
	}
}
