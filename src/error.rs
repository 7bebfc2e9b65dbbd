use thiserror::Error;

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt description for your logo";
pub const REMOTE_FALLBACK_MESSAGE: &str = "Failed to generate logo";
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "An error occurred while generating your logo";

/// Why a submission failed. `Display` is the text shown under the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoError {
    #[error("{}", EMPTY_PROMPT_MESSAGE)]
    Validation,

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// No usable response: network failure, unreadable body, JS exception.
    #[error("{0}")]
    Transport(String),
}

impl LogoError {
    pub fn remote(status: u16, detail: Option<&str>) -> Self {
        LogoError::Remote {
            status,
            message: detail.unwrap_or(REMOTE_FALLBACK_MESSAGE).to_string(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            LogoError::Transport(TRANSPORT_FALLBACK_MESSAGE.to_string())
        } else {
            LogoError::Transport(message)
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, LogoError::Transport(_))
    }
}
