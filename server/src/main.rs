mod config;
mod routes;

use forum_client::routes::AppRoute;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let app = routes::app(&config).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        api_base_url = config.api.base_url(),
        routes = ?AppRoute::ALL.map(AppRoute::path),
        "forum host listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
