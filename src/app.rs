use std::{io, net::SocketAddr, ops::Deref, sync::Arc};

use axum::Router;
use tokio::net::{TcpListener, TcpSocket};
use tower_http::{
	cors::CorsLayer,
	trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, error, info};

use crate::{
	config::AppConfig,
	fetch::{FetchError, Fetcher},
	route::{self, assets::SiteRoot},
};

#[allow(clippy::module_name_repetitions)]
pub struct AppStateInner {
	pub config: AppConfig,
	pub fetcher: Fetcher,
}

#[derive(Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct AppState(Arc<AppStateInner>);

impl Deref for AppState {
	type Target = AppStateInner;

	#[allow(clippy::explicit_deref_methods)]
	fn deref(&self) -> &Self::Target {
		self.0.deref()
	}
}

impl AppState {
	pub fn new(config: AppConfig) -> Result<Self, FetchError> {
		let fetcher = Fetcher::new(&config.upstream.user_agent, config.upstream.timeout())?;

		Ok(Self(Arc::new(AppStateInner { config, fetcher })))
	}
}

fn request_log(router: Router) -> Router {
	router.layer(
		TraceLayer::new_for_http()
			.make_span_with(DefaultMakeSpan::new().level(Level::INFO))
			.on_response(DefaultOnResponse::new().level(Level::INFO)),
	)
}

/// The proxy API on its own, behind a permissive CORS layer.
pub fn api(state: AppState) -> Router {
	request_log(
		route::api()
			.with_state(state)
			.layer(CorsLayer::permissive()),
	)
}

/// The proxy API plus the files under `root`, with the cross-origin header
/// set on every response.
pub fn site(state: AppState, root: &SiteRoot) -> Router {
	let router = route::api().with_state(state).merge(route::assets(root));

	request_log(route::assets::cross_origin(router))
}

/// Binds with `SO_REUSEADDR` so a restart right after a crash does not fail.
pub fn bind(addr: SocketAddr) -> io::Result<TcpListener> {
	let socket = if addr.is_ipv4() {
		TcpSocket::new_v4()?
	} else {
		TcpSocket::new_v6()?
	};
	socket.set_reuseaddr(true)?;
	socket.bind(addr)?;
	socket.listen(1024)
}

pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	Ok(())
}

async fn shutdown_signal() {
	match tokio::signal::ctrl_c().await {
		Ok(()) => info!("Server stopped by user"),
		Err(e) => {
			error!("cannot listen for Ctrl-C: {e}");
			std::future::pending::<()>().await;
		}
	}
}
