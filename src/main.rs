use football_analytics_api::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting football analytics api...");

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration in environment");

    if !config.fixtures_dir.is_dir() {
        tracing::warn!(
            "Fixture directory {} does not exist; data endpoints will return 404",
            config.fixtures_dir.display()
        );
    }

    let addr = config.addr();
    let app = football_analytics_api::app(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
