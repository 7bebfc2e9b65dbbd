use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/generate-logo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoRequest {
    pub prompt: String,
    // backend defaults to 1024x1024 when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl LogoRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// Successful generation payload, kept exactly as the backend sent it.
/// Known fields are read through accessors so an odd type or a `null` never
/// rejects the response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct GeneratedLogo {
    fields: Map<String, Value>,
}

impl GeneratedLogo {
    pub fn from_image(image: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("image".to_string(), Value::String(image.into()));
        Self { fields }
    }

    /// Base64 PNG bytes, empty unless the backend sent a string.
    pub fn image(&self) -> &str {
        self.fields
            .get("image")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn success(&self) -> Option<bool> {
        self.fields.get("success").and_then(Value::as_bool)
    }

    pub fn filename(&self) -> Option<&str> {
        self.fields.get("filename").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn has_image(&self) -> bool {
        !self.image().is_empty()
    }

    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.image())
    }
}

/// Error body of a non-2xx response. `detail` is kept raw since the backend
/// does not always send a string there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn detail_message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}
