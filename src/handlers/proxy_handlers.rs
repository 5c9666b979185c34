use axum::{
    extract::State,
    http::StatusCode,
    response::Json as AxumJson,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::handlers::proxy_dtos::ProxyRequest;
use crate::AppState;

/// Fallback for the proxy route: everything except POST is rejected.
pub async fn method_not_allowed() -> (StatusCode, AxumJson<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        AxumJson(json!({"error": "Method not allowed"})),
    )
}

/// Forwards a browser request to the upstream generative AI API with the
/// server-held credential appended, and relays the upstream status and
/// JSON body back unchanged. Exactly one upstream attempt per request.
pub async fn forward_ai_request(
    State(state): State<Arc<AppState>>,
    AxumJson(payload): AxumJson<Value>,
) -> Result<(StatusCode, AxumJson<Value>), (StatusCode, AxumJson<Value>)> {
    let api_key = state.settings.ai_api_key.as_deref().ok_or_else(|| {
        tracing::error!("Proxy request received but AI_API_KEY is not configured");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            AxumJson(json!({"error": "Missing AI_API_KEY environment variable"})),
        )
    })?;

    let request: ProxyRequest = serde_json::from_value(payload).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            AxumJson(json!({"error": "Missing required field: endpoint"})),
        )
    })?;

    let method_name = request
        .method
        .as_deref()
        .unwrap_or("GET")
        .to_uppercase();
    let method = reqwest::Method::from_bytes(method_name.as_bytes()).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            AxumJson(json!({"error": format!("Invalid HTTP method: {}", method_name)})),
        )
    })?;

    // The supplied endpoint may already carry a query string.
    let separator = if request.endpoint.contains('?') { '&' } else { '?' };
    let upstream_url = format!(
        "{}{}key={}",
        request.endpoint,
        separator,
        urlencoding::encode(api_key)
    );

    println!("Forwarding {} request to upstream AI endpoint", method_name);

    let mut upstream_request = state.http_client.request(method, &upstream_url);
    if method_name != "GET" {
        if let Some(body) = &request.body {
            upstream_request = upstream_request.json(body);
        }
    }

    let upstream_response = upstream_request.send().await.map_err(|e| {
        tracing::error!("Failed to reach upstream AI service: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            AxumJson(json!({
                "error": "Failed to reach upstream AI service",
                "message": e.to_string(),
            })),
        )
    })?;

    let upstream_status = upstream_response.status();
    let upstream_body: Value = upstream_response.json().await.map_err(|e| {
        tracing::error!("Failed to parse upstream AI response: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            AxumJson(json!({
                "error": "Failed to parse upstream AI response",
                "message": e.to_string(),
            })),
        )
    })?;

    let status = StatusCode::from_u16(upstream_status.as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok((status, AxumJson(upstream_body)))
}
