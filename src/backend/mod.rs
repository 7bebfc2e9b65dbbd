mod fetch;
#[cfg(feature = "ssr")]
mod native;

pub use fetch::FetchBackend;
#[cfg(feature = "ssr")]
pub use native::HttpBackend;

use http::StatusCode;

use crate::error::LogoError;
use crate::types::{ErrorBody, GeneratedLogo, LogoRequest};

/// The one outbound call: turn a prompt into a generated logo.
#[allow(async_fn_in_trait)]
pub trait LogoBackend {
    async fn generate(&self, request: &LogoRequest) -> Result<GeneratedLogo, LogoError>;
}

/// Maps a settled HTTP exchange onto the generation outcome. Shared by every
/// transport so they agree on status and body handling.
pub fn interpret_response(status: u16, body: &str) -> Result<GeneratedLogo, LogoError> {
    let is_success = StatusCode::from_u16(status)
        .map(|status| status.is_success())
        .unwrap_or(false);

    if !is_success {
        let error_body = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        return Err(LogoError::remote(status, error_body.detail_message()));
    }

    serde_json::from_str::<GeneratedLogo>(body).map_err(|e| LogoError::transport(e.to_string()))
}
