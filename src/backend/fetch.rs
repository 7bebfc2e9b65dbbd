use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{interpret_response, LogoBackend};
use crate::config::ClientConfig;
use crate::error::LogoError;
use crate::types::{GeneratedLogo, LogoRequest};

/// Browser transport built on `window.fetch`.
#[derive(Clone, Debug)]
pub struct FetchBackend {
    endpoint: String,
}

impl FetchBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.generate_logo_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, body: &str) -> Result<(u16, String), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(&self.endpoint, &opts)?;
        request.headers().set("Content-Type", "application/json")?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;
        let text = JsFuture::from(resp.text()?).await?;

        Ok((resp.status(), text.as_string().unwrap_or_default()))
    }
}

impl LogoBackend for FetchBackend {
    async fn generate(&self, request: &LogoRequest) -> Result<GeneratedLogo, LogoError> {
        let body = serde_json::to_string(request).map_err(|e| LogoError::transport(e.to_string()))?;
        let (status, text) = self
            .post(&body)
            .await
            .map_err(|e| LogoError::transport(js_error_message(&e)))?;
        interpret_response(status, &text)
    }
}

/// Text of a thrown JS value: `Error.message`, a bare string, or nothing.
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_default()
}
