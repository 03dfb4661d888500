#![warn(clippy::pedantic)]

use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf,
};

use clap::Parser;
use pageproxy::{
	app::{self, AppState},
	config::AppConfig,
	route::api::Endpoint,
};
use strum::IntoEnumIterator;
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Republish the upstream homepage and headlines as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Port to serve on
	#[arg(short, long, default_value_t = 5002)]
	port: u16,

	/// Address to bind
	#[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
	address: IpAddr,

	/// Upstream and extraction settings (TOML, optional)
	#[arg(short, long, default_value = "pageproxy.toml")]
	config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	pageproxy::telemetry::init()?;
	let args = Args::parse();

	let state = AppState::new(AppConfig::load(&args.config)?)?;

	let listener = app::bind(SocketAddr::new(args.address, args.port))?;
	let port = listener.local_addr()?.port();

	info!("Starting proxy server, available endpoints:");
	for endpoint in Endpoint::iter() {
		info!("  - http://localhost:{port}{}", endpoint.path());
	}

	app::serve(listener, app::api(state)).await
}
