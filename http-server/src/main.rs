mod config;
mod error;
mod router;

use clap::Parser;

fn init_logs() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logs();

    let config = config::Config::parse();
    let client = config.client().await?;
    let app = router::router(client);

    let listener = tokio::net::TcpListener::bind(config.binding()).await?;
    tracing::info!(
        "プロキシサーバーが起動しました: http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;
    Ok(())
}
