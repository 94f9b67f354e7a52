use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use log::info;

use rs_nlp_server::config::ServerConfig;
use rs_nlp_server::fetch::PageFetcher;
use rs_nlp_server::handlers::{configure, SharedData};

/// Main entry point for the server.
///
/// Builds the shared analyzer and page fetcher, then starts an Actix-web
/// HTTP server with the `/v1` endpoints.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::parse();

	let shared_data = web::Data::new(Mutex::new(SharedData::new(config.cache_capacity)));
	let fetcher = web::Data::new(PageFetcher::new(config.fetch_timeout()).map_err(std::io::Error::other)?);
	let allowed_origin = config.allowed_origin.clone();

	info!(
		"Starting rs-nlp server on {}:{} (cache capacity {})",
		config.host, config.port, config.cache_capacity
	);

	HttpServer::new(move || {
		let cors = match &allowed_origin {
			Some(origin) => Cors::default()
				.allowed_origin(origin)
				.allowed_methods(vec!["GET", "POST"])
				.allow_any_header(),
			None => Cors::permissive(),
		};

		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors)
			.app_data(shared_data.clone())
			.app_data(fetcher.clone())
			.configure(configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
