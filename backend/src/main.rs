use backend::{config::{check_frontend_dir, Config}, router, FRONTEND_PREFIX};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = Config::from_env();

	match config.frontend_dir {
		Some(ref dir) => {
			if let Err(err) = check_frontend_dir(dir) {
				error!("{err}; please fix it or unset FRONTEND_DIR before running the server.");
				return Ok(());
			}
			info!("Serving client bundle from {} under {FRONTEND_PREFIX}", dir.display());
		},
		None => info!("FRONTEND_DIR is not set, only serving the server-rendered invitation"),
	}

	let listener = tokio::net::TcpListener::bind(config.addr).await?;

	info!("Serving invitation at http://{}", listener.local_addr()?);

	axum::serve(listener, router(&config)).await?;

	Ok(())
}
