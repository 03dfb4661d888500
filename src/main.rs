#![warn(clippy::pedantic)]

use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf,
};

use clap::Parser;
use pageproxy::{
	app::{self, AppState},
	config::AppConfig,
	route::assets::SiteRoot,
};
use tracing::{error, info};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Serve a WebAssembly application together with the content proxy API.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Port to serve on
	#[arg(short, long, default_value_t = 5000)]
	port: u16,

	/// Directory to serve
	#[arg(short, long, default_value = ".")]
	directory: PathBuf,

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

	let root = SiteRoot::open(&args.directory).inspect_err(|e| {
		error!("{e}");
		error!("Make sure you're pointing at the project root");
	})?;
	let state = AppState::new(AppConfig::load(&args.config)?)?;

	let listener = app::bind(SocketAddr::new(args.address, args.port))?;
	let port = listener.local_addr()?.port();

	info!("Serving directory: {}", root.path().display());
	info!("Server running at: http://localhost:{port}");
	info!("To compile Rust to WebAssembly, run: wasm-pack build --target web --out-dir pkg");
	info!("Press Ctrl+C to stop the server");

	app::serve(listener, app::site(state, &root)).await
}
