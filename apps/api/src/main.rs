mod config;
mod errors;
mod ids;
mod models;
mod routes;
mod state;
mod store;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::employee::Employee;
use crate::models::skill::Skill;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{SharedStore, Store};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Employee API v{}", env!("CARGO_PKG_VERSION"));

    // Seed through the normal create path so every seed record gets a
    // generated id, same as records created over HTTP.
    let employees: SharedStore<Employee> = SharedStore::new(Store::new());
    for employee in models::employee::seed() {
        employees.create(employee);
    }
    let skills: SharedStore<Skill> = SharedStore::new(Store::new());
    for skill in models::skill::seed() {
        skills.create(skill);
    }
    info!(
        "Stores seeded: {} employees, {} skills",
        employees.list().len(),
        skills.list().len()
    );

    let state = AppState { employees, skills };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
