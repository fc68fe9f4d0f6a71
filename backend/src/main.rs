//! Backend entry-point: loads settings, prepares the store and serves the API.
//!
//! Startup order matters: the schema is migrated and seeded before the
//! listener binds, so the readiness check only reports ready once requests
//! can succeed.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hostel::domain::BootstrapService;
use hostel::inbound::http::health::HealthState;
use hostel::outbound::persistence::{
    DbPool, DieselRoomRepository, DieselUserRepository, PoolConfig, run_pending_migrations,
};
use hostel::settings::HostelSettings;
use server::{Credentials, ServerConfig, create_server};
use std::sync::Arc;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        HostelSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let signing_secret = settings.signing_secret()?;
    let database_path = settings.database_path();
    let database_url = database_path.to_string_lossy().into_owned();
    info!(path = %database_path.display(), "opening database");

    run_pending_migrations(&database_url)
        .await
        .wrap_err("failed to migrate database")?;
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .wrap_err("failed to open database pool")?;

    let config = ServerConfig::new(bind_addr, pool.clone(), signing_secret)
        .with_cookie_secure(settings.cookie_secure())
        .with_allocation_policy(settings.allocation_policy());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::build_prometheus());
    let credentials = Credentials::from_config(&config);

    let report = BootstrapService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselRoomRepository::new(pool)),
        credentials.hasher.clone(),
    )
    .run(&settings.admin_seed())
    .await
    .wrap_err("failed to seed database")?;
    info!(
        admin_created = report.admin_created,
        rooms_created = report.rooms_created,
        "bootstrap complete"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, &credentials)?;
    info!(addr = %bind_addr, "listening");
    server.await?;
    Ok(())
}
