use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod handlers {
    pub mod proxy_dtos;
    pub mod proxy_handlers;
}
pub mod config {
    pub mod settings;
}

use config::settings::Settings;
use handlers::proxy_handlers;

pub struct AppState {
    pub settings: Settings,
    pub http_client: reqwest::Client,
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/ai/proxy",
            post(proxy_handlers::forward_ai_request)
                .fallback(proxy_handlers::method_not_allowed),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}
