use tracing_subscriber::EnvFilter;

/// Timestamped `fmt` output on stdout, `info` unless `RUST_LOG` says otherwise.
///
/// Fails if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.try_init()
		.map_err(|e| anyhow::anyhow!(e))
}
