use dotenvy::dotenv;
use smart_animator_backend::config::settings::Settings;
use smart_animator_backend::{app_router, AppState};
use std::sync::Arc;
use tracing::Level;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let settings = Settings::from_env();
    if settings.ai_api_key.is_none() {
        // Deployment precondition. Requests will be answered with 500
        // until the key is provided.
        tracing::warn!("AI_API_KEY is not set; proxy requests will fail until it is configured");
    }

    let state = Arc::new(AppState {
        settings,
        http_client: reqwest::Client::new(),
    });

    let app = app_router(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3000").await.unwrap();
    tracing::info!("Listening on 127.0.0.1:3000");
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
