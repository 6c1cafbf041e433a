//! # Masterblog API Server
//!
//! actix-web entry point: telemetry, configuration, shared state, routes.

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Masterblog API on {}:{}",
        config.host,
        config.port
    );

    // One store shared by every worker; workers clone the handle only.
    let state = AppState::seeded();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // The API is consumed by a separately hosted front end.
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
