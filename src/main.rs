use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use coffeemesh::app_system::{setup_tracing, AppConfig, KitchenSystem, OrdersSystem, ServiceKind};
use coffeemesh::http::{kitchen_router, orders_router, KitchenState, OrdersState};

#[derive(Parser)]
#[command(name = "coffeemesh", about = "In-memory orders and kitchen services")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the orders service
    Orders(ServeArgs),
    /// Run the kitchen service
    Kitchen(ServeArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Overrides APP_HOST
    #[arg(long)]
    host: Option<String>,
    /// Overrides APP_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let (service, args) = match cli.command {
        Command::Orders(args) => (ServiceKind::Orders, args),
        Command::Kitchen(args) => (ServiceKind::Kitchen, args),
    };

    let mut config = AppConfig::from_env(service)?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    match service {
        ServiceKind::Orders => run_orders(config).await,
        ServiceKind::Kitchen => run_kitchen(config).await,
    }
}

async fn run_orders(config: AppConfig) -> Result<()> {
    let system = OrdersSystem::new(config.buffer_size);
    let app = orders_router(OrdersState::new(system.order_client.clone()));

    serve(app, &config).await?;

    system.shutdown().await.context("orders actor panicked")?;
    Ok(())
}

async fn run_kitchen(config: AppConfig) -> Result<()> {
    let system = KitchenSystem::new(config.buffer_size);
    let state = KitchenState::new(system.schedule_client.clone()).with_revalidation(config.revalidate_on_list);
    let app = kitchen_router(state);

    serve(app, &config).await?;

    system.shutdown().await.context("kitchen actor panicked")?;
    Ok(())
}

/// Serves `app` until Ctrl+C or SIGTERM. The router, and with it every
/// client clone it holds, is dropped on return.
async fn serve(app: axum::Router, config: &AppConfig) -> Result<()> {
    let address = config.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(service = ?config.service, %address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
