use crate::opt::{Cli, Commands, Run};
use academy_db::sea_orm::{ConnectOptions, Database};
use academy_migration::{Migrator, MigratorTrait};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod opt;
mod permissions;
mod routes;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

async fn run(opt: Run) -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut options = ConnectOptions::new(opt.database_url.to_string());
    if let Some(min) = opt.db.db_min_connections {
        options.min_connections(min);
    }
    if let Some(max) = opt.db.db_max_connections {
        options.max_connections(max);
    }
    let conn = Database::connect(options).await?;

    Migrator::up(&conn, None)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to run migrations"))?;

    let Run { host, port, origins, .. } = opt;
    let app = app::create_app(origins, conn)?;

    let addr = SocketAddr::new(host.unwrap_or(DEFAULT_HOST), port.unwrap_or(DEFAULT_PORT));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(opt) => run(opt).await,
    }
}
