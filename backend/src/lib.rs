use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod invitation;
pub mod robots;

use config::Config;

/// Prefix the built client bundle is served under, if there is one
pub const FRONTEND_PREFIX: &str = "/app";

pub fn router(config: &Config) -> Router {
	let app = Router::new()
		.route("/", get(invitation::get_invitation))
		.route("/robots.txt", get(robots::get_robots_txt));

	let app = match config.frontend_dir {
		Some(ref dir) => app.nest_service(FRONTEND_PREFIX, ServeDir::new(dir)),
		None => app
	};

	app.layer(TraceLayer::new_for_http())
}
