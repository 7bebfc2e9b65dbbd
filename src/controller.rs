//! State behind the logo form: the prompt, the one request that may be in
//! flight, and what the page should show for it.

use crate::backend::LogoBackend;
use crate::download::LogoDownload;
use crate::error::LogoError;
use crate::types::{GeneratedLogo, LogoRequest};

#[cfg(feature = "hydrate")]
macro_rules! console_error {
    ($($t:tt)*) => {
        web_sys::console::error_1(&format!($($t)*).into());
    };
}

#[cfg(not(feature = "hydrate"))]
macro_rules! console_error {
    ($($t:tt)*) => {
        log::error!($($t)*);
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    /// Nothing in flight. `error` holds a rejected blank prompt.
    Idle { error: Option<LogoError> },
    Submitting,
    Succeeded(GeneratedLogo),
    Failed(LogoError),
}

impl Default for RequestState {
    fn default() -> Self {
        RequestState::Idle { error: None }
    }
}

/// What the page renders below the prompt field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    Form { error: Option<&'a LogoError> },
    Loading,
    Result { logo: &'a GeneratedLogo },
}

/// Issued by [`LogoController::begin_submit`]; the caller sends `request` and
/// hands the outcome back with `ticket`.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub ticket: u64,
    pub request: LogoRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogoController {
    prompt: String,
    size: Option<String>,
    state: RequestState,
    latest_ticket: u64,
}

impl LogoController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn update_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, RequestState::Submitting)
    }

    pub fn error(&self) -> Option<&LogoError> {
        match &self.state {
            RequestState::Idle { error } => error.as_ref(),
            RequestState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn generated_logo(&self) -> Option<&GeneratedLogo> {
        match &self.state {
            RequestState::Succeeded(logo) => Some(logo),
            _ => None,
        }
    }

    /// Validates the prompt and moves to `Submitting`.
    ///
    /// Returns `None` without touching the network when the prompt is blank
    /// (the state returns to `Idle` carrying the validation error) or when a
    /// request is already in flight (nothing changes).
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if self.is_submitting() {
            log::debug!("ignoring submit while request {} is in flight", self.latest_ticket);
            return None;
        }

        if self.prompt.trim().is_empty() {
            self.state = RequestState::Idle {
                error: Some(LogoError::Validation),
            };
            return None;
        }

        self.latest_ticket += 1;
        self.state = RequestState::Submitting;

        let mut request = LogoRequest::new(self.prompt.clone());
        request.size = self.size.clone();

        Some(PendingRequest {
            ticket: self.latest_ticket,
            request,
        })
    }

    /// Applies the outcome of the request identified by `ticket`. Outcomes for
    /// anything but the latest in-flight ticket are dropped. Returns whether
    /// the outcome was applied.
    pub fn finish(&mut self, ticket: u64, outcome: Result<GeneratedLogo, LogoError>) -> bool {
        if ticket != self.latest_ticket || !self.is_submitting() {
            log::debug!(
                "dropping outcome for ticket {ticket}, latest is {}",
                self.latest_ticket
            );
            return false;
        }

        self.state = match outcome {
            Ok(logo) => RequestState::Succeeded(logo),
            Err(error) => {
                if error.is_transport() {
                    console_error!("Error generating logo: {error}");
                }
                RequestState::Failed(error)
            }
        };
        true
    }

    /// Runs one whole submission against `backend`.
    pub async fn submit<B: LogoBackend>(&mut self, backend: &B) -> &RequestState {
        if let Some(pending) = self.begin_submit() {
            let outcome = backend.generate(&pending.request).await;
            self.finish(pending.ticket, outcome);
        }
        &self.state
    }

    pub fn view_state(&self) -> ViewState<'_> {
        match &self.state {
            RequestState::Idle { error } => ViewState::Form {
                error: error.as_ref(),
            },
            RequestState::Submitting => ViewState::Loading,
            RequestState::Succeeded(logo) => ViewState::Result { logo },
            RequestState::Failed(error) => ViewState::Form { error: Some(error) },
        }
    }

    /// Builds the file for the current logo, or `None` when there is nothing
    /// to save.
    pub fn download(&self, timestamp_ms: i64) -> Option<LogoDownload> {
        let logo = self.generated_logo().filter(|logo| logo.has_image())?;
        match LogoDownload::from_logo(logo, timestamp_ms) {
            Ok(download) => Some(download),
            Err(e) => {
                console_error!("Generated image is not valid base64: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EMPTY_PROMPT_MESSAGE, REMOTE_FALLBACK_MESSAGE, TRANSPORT_FALLBACK_MESSAGE};
    use std::cell::RefCell;

    /// Records every request and replays a fixed outcome.
    struct ScriptedBackend {
        outcome: Result<GeneratedLogo, LogoError>,
        calls: RefCell<Vec<LogoRequest>>,
    }

    impl ScriptedBackend {
        fn new(outcome: Result<GeneratedLogo, LogoError>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn replying(status: u16, body: &str) -> Self {
            Self::new(crate::backend::interpret_response(status, body))
        }
    }

    impl LogoBackend for ScriptedBackend {
        async fn generate(&self, request: &LogoRequest) -> Result<GeneratedLogo, LogoError> {
            self.calls.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    fn controller_with(prompt: &str) -> LogoController {
        let mut controller = LogoController::new();
        controller.update_prompt(prompt);
        controller
    }

    #[test]
    fn test_starts_idle() {
        let controller = LogoController::new();
        assert_eq!(controller.state(), &RequestState::default());
        assert_eq!(controller.view_state(), ViewState::Form { error: None });
    }

    #[test]
    fn test_update_prompt_does_not_validate() {
        let mut controller = LogoController::new();
        controller.update_prompt("   ");
        assert_eq!(controller.prompt(), "   ");
        assert_eq!(controller.state(), &RequestState::default());
    }

    #[tokio::test]
    async fn test_blank_prompt_never_reaches_backend() {
        let backend = ScriptedBackend::replying(200, r#"{"image":"abc"}"#);
        let mut controller = controller_with("   ");

        controller.submit(&backend).await;

        assert!(backend.calls.borrow().is_empty());
        assert_eq!(
            controller.state(),
            &RequestState::Idle {
                error: Some(LogoError::Validation)
            }
        );
        assert_eq!(controller.error_message().as_deref(), Some(EMPTY_PROMPT_MESSAGE));
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_blank_prompt_after_failure_returns_to_idle() {
        let mut controller = controller_with("fox");
        controller
            .submit(&ScriptedBackend::replying(500, "boom"))
            .await;
        assert!(matches!(controller.state(), RequestState::Failed(_)));

        controller.update_prompt("");
        assert_eq!(controller.begin_submit(), None);

        assert!(matches!(controller.state(), RequestState::Idle { error: Some(_) }));
        assert_eq!(controller.error_message().as_deref(), Some(EMPTY_PROMPT_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_sends_prompt_once() {
        let backend = ScriptedBackend::replying(200, r#"{"image":"abc"}"#);
        let mut controller = controller_with("A red fox logo");

        controller.submit(&backend).await;

        let calls = backend.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            serde_json::to_string(&calls[0]).unwrap(),
            r#"{"prompt":"A red fox logo"}"#
        );
    }

    #[tokio::test]
    async fn test_prompt_is_sent_untrimmed() {
        let backend = ScriptedBackend::replying(200, r#"{"image":"abc"}"#);
        let mut controller = controller_with("  fox  ");

        controller.submit(&backend).await;

        assert_eq!(backend.calls.borrow()[0].prompt, "  fox  ");
    }

    #[tokio::test]
    async fn test_success_stores_logo() {
        let backend = ScriptedBackend::replying(200, r#"{"image":"iVBOR..."}"#);
        let mut controller = controller_with("A red fox logo");

        controller.submit(&backend).await;

        assert!(matches!(controller.state(), RequestState::Succeeded(_)));
        assert_eq!(controller.generated_logo().unwrap().image(), "iVBOR...");
        assert_eq!(controller.error_message(), None);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_rejection_with_detail() {
        let backend = ScriptedBackend::replying(400, r#"{"detail":"prompt too long"}"#);
        let mut controller = controller_with("A red fox logo");

        controller.submit(&backend).await;

        assert!(matches!(controller.state(), RequestState::Failed(_)));
        assert_eq!(controller.error_message().as_deref(), Some("prompt too long"));
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_rejection_with_unparseable_body() {
        let backend = ScriptedBackend::replying(500, "Internal Server Error");
        let mut controller = controller_with("A red fox logo");

        controller.submit(&backend).await;

        assert_eq!(controller.error_message().as_deref(), Some(REMOTE_FALLBACK_MESSAGE));
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_network_failure_message() {
        let backend = ScriptedBackend::new(Err(LogoError::transport("Failed to fetch")));
        let mut controller = controller_with("A red fox logo");

        controller.submit(&backend).await;

        assert_eq!(controller.error_message().as_deref(), Some("Failed to fetch"));
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_network_failure_without_message() {
        let backend = ScriptedBackend::new(Err(LogoError::transport("")));
        let mut controller = controller_with("A red fox logo");

        controller.submit(&backend).await;

        assert_eq!(
            controller.error_message().as_deref(),
            Some(TRANSPORT_FALLBACK_MESSAGE)
        );
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_error_cleared_on_next_submission() {
        let mut controller = controller_with("");
        controller.submit(&ScriptedBackend::replying(200, "{}")).await;
        assert!(controller.error().is_some());

        controller.update_prompt("fox");
        let pending = controller.begin_submit().unwrap();
        assert_eq!(controller.error(), None);
        assert_eq!(controller.view_state(), ViewState::Loading);

        controller.finish(pending.ticket, Ok(GeneratedLogo::from_image("abc")));
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut controller = controller_with("fox");
        let first = controller.begin_submit().unwrap();

        assert_eq!(controller.begin_submit(), None);
        assert!(controller.is_submitting());

        assert!(controller.finish(first.ticket, Ok(GeneratedLogo::from_image("abc"))));
    }

    #[test]
    fn test_stale_and_duplicate_outcomes_are_dropped() {
        let mut controller = controller_with("fox");
        let first = controller.begin_submit().unwrap();
        assert!(controller.finish(first.ticket, Err(LogoError::transport("timeout"))));

        let second = controller.begin_submit().unwrap();
        assert!(second.ticket > first.ticket);
        assert!(!controller.finish(first.ticket, Ok(GeneratedLogo::from_image("old"))));
        assert!(controller.is_submitting());

        assert!(controller.finish(second.ticket, Ok(GeneratedLogo::from_image("new"))));
        assert!(!controller.finish(second.ticket, Err(LogoError::transport("late"))));
        assert_eq!(controller.generated_logo().unwrap().image(), "new");
    }

    #[test]
    fn test_size_is_forwarded() {
        let mut controller = LogoController::new().with_size("512x512");
        controller.update_prompt("fox");
        let pending = controller.begin_submit().unwrap();
        assert_eq!(pending.request.size.as_deref(), Some("512x512"));
    }

    #[test]
    fn test_view_state_per_request_state() {
        let logo = GeneratedLogo::from_image("abc");
        let validation = LogoError::Validation;
        let cases = [
            (RequestState::default(), ViewState::Form { error: None }),
            (
                RequestState::Idle {
                    error: Some(LogoError::Validation),
                },
                ViewState::Form {
                    error: Some(&validation),
                },
            ),
            (RequestState::Submitting, ViewState::Loading),
            (
                RequestState::Failed(LogoError::Validation),
                ViewState::Form {
                    error: Some(&validation),
                },
            ),
            (
                RequestState::Succeeded(logo.clone()),
                ViewState::Result { logo: &logo },
            ),
        ];

        for (state, expected) in cases {
            let controller = LogoController {
                state,
                ..Default::default()
            };
            assert_eq!(controller.view_state(), expected);
        }
    }

    #[test]
    fn test_download_without_logo_is_noop() {
        assert_eq!(LogoController::new().download(1), None);

        let controller = LogoController {
            state: RequestState::Succeeded(GeneratedLogo::default()),
            ..Default::default()
        };
        assert_eq!(controller.download(1), None);
    }

    #[test]
    fn test_download_decodes_image() {
        let controller = LogoController {
            state: RequestState::Succeeded(GeneratedLogo::from_image("abc123")),
            ..Default::default()
        };

        let download = controller.download(crate::download::now_ms()).unwrap();

        let digits = download
            .filename
            .strip_prefix("logo-")
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap();
        assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(download.bytes, vec![0x69, 0xb7, 0x35, 0xdb]);
    }

    #[test]
    fn test_download_of_invalid_image_is_noop() {
        let controller = LogoController {
            state: RequestState::Succeeded(GeneratedLogo::from_image("***")),
            ..Default::default()
        };
        assert_eq!(controller.download(1), None);
    }
}
