use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use poem::{Server, listener::TcpListener};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use be_menu_rust::create_app;
use be_menu_rust::store::{DieselMenuStore, MenuStore, init_pool};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "be_menu_rust=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL is not set in environment"))?;
    let pool = init_pool(&database_url)?;
    let store: Arc<dyn MenuStore> = Arc::new(DieselMenuStore::new(pool));

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr);

    info!("Server running at http://localhost:{}", port);
    Server::new(listener)
        .run_with_graceful_shutdown(
            create_app(store),
            async {
                signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
                info!("Received Ctrl+C, shutting down gracefully...");
            },
            None,
        )
        .await?;

    info!("Server stopped.");
    Ok(())
}
