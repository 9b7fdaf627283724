use anyhow::Result;
use clap::Parser;
use shelf_engine::catalog;
use shelf_engine::config::CliArgs;
use shelf_engine::server::ShelfServer;
use shelf_engine::transport::NdjsonTransport;
use shelf_engine::RecommendationIndex;

fn main() -> Result<()> {
	let args = CliArgs::parse();

	// Logs go to stderr; stdout carries protocol frames only
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
		)
		.init();

	let items = catalog::load_csv(&args.catalog)?;
	let index = RecommendationIndex::build(items, &args.index_config())?;

	let transport = NdjsonTransport::new();
	let server = ShelfServer::new(transport, index, args.default_k);

	tracing::info!("shelf-engine ready");

	if let Err(e) = server.run() {
		tracing::error!("Server error: {}", e);
		std::process::exit(1);
	}

	Ok(())
}
