//! Backend entry-point: wires the status banner, health probes, and the
//! database bootstrap.

use std::env;

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;

use backend::api::health::{HealthState, live, ready};
use backend::api::index;
use backend::db::{Database, DatabaseConfig};
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let port = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(5000);

    connect_database().await;

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the probes see the shared state.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .service(index)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app.route(
            "/api-docs/openapi.json",
            web::get().to(|| async { web::Json(ApiDoc::openapi()) }),
        );

        app
    })
    .bind(("0.0.0.0", port))?;

    info!(port, "server listening");
    health_state.mark_ready();
    server.run().await
}

/// Attempt the startup database connection.
///
/// A missing or unreachable database is logged but never fatal: the stub
/// carries no queries yet, and the health probes must stay reachable so
/// deployments can diagnose the problem.
async fn connect_database() {
    let Ok(url) = env::var("DATABASE_URL") else {
        warn!("DATABASE_URL not set; skipping database bootstrap");
        return;
    };

    let config = DatabaseConfig::new(url);
    match Database::connect(&config).await {
        Ok(database) => match database.ping().await {
            Ok(()) => info!("database connected"),
            Err(error) => warn!(%error, "database ping failed"),
        },
        Err(error) => warn!(%error, "database connection failed"),
    }
}
