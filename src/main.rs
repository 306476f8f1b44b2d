use crate::config::Config;
use crate::db::{init_db, Database, ListingRepo};
use crate::router::{respond, RouterState};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod domain;
mod errors;
mod request;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    // Create the database handle and make sure the collection exists
    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db) {
        tracing::error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let state = RouterState {
        listings: ListingRepo::new(db),
        base_path: config.base_path.clone(),
    };

    tracing::info!(
        addr = %config.addr,
        base_path = %config.base_path,
        workers = config.max_workers,
        "Starting server"
    );

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
