use std::env;

/// Environment-provided configuration, read once at startup and injected
/// into the shared application state.
#[derive(Clone)]
pub struct Settings {
    /// Server-held credential for the upstream generative AI API. Absence
    /// makes the proxy endpoint unusable until the deployment is fixed.
    pub ai_api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            ai_api_key: env::var("AI_API_KEY").ok().filter(|key| !key.is_empty()),
        }
    }
}
