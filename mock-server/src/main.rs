use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let seeded = std::env::var("SEED").is_ok_and(|v| v == "1");
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr).await?;
    info!(seeded, "binding to {addr}");

    let router = if seeded {
        mock_server::app_with(mock_server::seed())
    } else {
        mock_server::app()
    };
    mock_server::serve(listener, router).await
}
