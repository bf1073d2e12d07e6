mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::{get, post};
use std::{path::PathBuf, sync::Arc, time::Duration, time::Instant};
use tracing::{error, info};
use yatra::{prelude::*, service};

const PORT: u32 = 3000;
const LATENCY_ENV: &str = "YATRA_LATENCY_MS";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();

    let now = Instant::now();
    let table = match args.get(1) {
        Some(path) => {
            info!("Loading routes from {path}...");
            let source = RouteSource::default().from_file(PathBuf::from(path));
            match RouteTable::new().with_source(&source) {
                Ok(table) => table,
                Err(err) => {
                    error!("Failed to load routes: {err}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            info!("No route file given, using built-in routes");
            RouteTable::builtin().clone()
        }
    };
    info!("Loading data took {:?}", now.elapsed());

    let mut config = service::Config::default();
    if let Ok(value) = std::env::var(LATENCY_ENV) {
        match value.parse::<u64>() {
            Ok(ms) => config.latency = Duration::from_millis(ms),
            Err(err) => {
                error!("Invalid {LATENCY_ENV} {value:?}: {err}");
                std::process::exit(1);
            }
        }
    }
    info!("Artificial latency {:?}", config.latency);

    let service = RouteService::new(Arc::new(table), config);
    let state = Arc::new(AppState::new(service, Catalog::builtin()));

    let app = axum::Router::new()
        .route("/routes", get(api::routes))
        .route("/route", get(api::route))
        .route("/available", get(api::available))
        .route("/places", get(api::places))
        .route("/listing", get(api::listing))
        .route("/listing/{id}/favorite", post(api::toggle_favorite))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {PORT}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {PORT}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
