use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ProxyRequest {
    /// Upstream URL to forward to. The credential is appended server-side.
    pub endpoint: String,
    /// Upstream HTTP method, defaults to GET.
    pub method: Option<String>,
    /// JSON payload for the upstream call. Ignored when the method is GET.
    pub body: Option<Value>,
}
