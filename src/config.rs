use serde::{Deserialize, Serialize};

/// Environment variable holding the generation backend base URL.
pub const BACKEND_URL_VAR: &str = "LOGO_BACKEND_URL";

pub const GENERATE_LOGO_PATH: &str = "/api/generate-logo";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub backend_url: String,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into().trim().trim_end_matches('/').to_string();
        Self { backend_url }
    }

    /// Base URL baked in at compile time. Empty means same origin.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("LOGO_BACKEND_URL").unwrap_or_default())
    }

    /// A value set at runtime wins over the compile-time one.
    pub fn resolve(runtime: Option<String>) -> Self {
        match runtime {
            Some(backend_url) => Self::new(backend_url),
            None => Self::from_build_env(),
        }
    }

    /// What the server hands to the page, read after `.env` is loaded.
    pub fn from_env_or_build() -> Self {
        Self::resolve(std::env::var(BACKEND_URL_VAR).ok())
    }

    /// Runtime lookup for native entry points, after `.env` is loaded.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        std::env::var(BACKEND_URL_VAR).map(Self::new)
    }

    pub fn generate_logo_url(&self) -> String {
        format!("{}{}", self.backend_url, GENERATE_LOGO_PATH)
    }
}
