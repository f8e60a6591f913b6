//! Sort form controller.
//!
//! # Design
//! - The controller owns no DOM handles; it talks to the page through
//!   [`FormView`] and to the backend through [`SortTransport`].
//! - Form values are read when a submission starts, never cached.
//! - Overlapping submissions are allowed. Each takes a ticket and only the most
//!   recently started one may render; older completions are dropped.

use std::cell::Cell;

use async_trait::async_trait;
use tunesort_api_models::{SubmissionPayload, decode_sort_response};

use crate::config::ControllerConfig;
use crate::error::{ControllerError, ControllerResult};
use crate::logs::LogSequence;

/// Severity of a diagnostic entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// Operation failed.
    Error,
    /// Informational detail for developers.
    Debug,
}

/// Entry written to the diagnostic channel (the browser console on wasm).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub level: DiagnosticLevel,
    /// Message text.
    pub message: String,
}

impl Diagnostic {
    /// Error-level entry.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }

    /// Debug-level entry.
    #[must_use]
    pub fn debug(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Debug,
            message: message.into(),
        }
    }
}

/// Page surface the controller reads from and writes to.
pub trait FormView {
    /// Current values of the sort form's named fields.
    ///
    /// # Errors
    /// Returns [`ControllerError::FormData`] when the form cannot be read.
    fn read_fields(&self) -> ControllerResult<SubmissionPayload>;

    /// Replace the script textarea value.
    fn set_script(&self, text: &str);

    /// Replace the whole text content of the log output region.
    fn set_log_text(&self, text: &str);

    /// Show a blocking notification.
    fn alert(&self, message: &str);

    /// Record an entry on the diagnostic channel.
    fn report_diagnostic(&self, diagnostic: Diagnostic);
}

/// Local file the user picked as a sort script.
#[async_trait(?Send)]
pub trait ScriptFile {
    /// Read the full file contents as text.
    ///
    /// # Errors
    /// Returns [`ControllerError::FileRead`] when the file cannot be read or decoded.
    async fn read_text(&self) -> ControllerResult<String>;
}

/// Raw HTTP response handed back by a [`SortTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Build a response from status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// Outbound channel to the sort endpoint.
#[async_trait(?Send)]
pub trait SortTransport {
    /// POST a JSON body to `endpoint` with `Content-Type: application/json`.
    ///
    /// # Errors
    /// Returns [`ControllerError::Transport`] when no response is received.
    async fn post_json(&self, endpoint: &str, body: String) -> ControllerResult<TransportResponse>;
}

/// Result of a file-load attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileLoadOutcome {
    /// No file was selected.
    NoFile,
    /// The script textarea now holds the file contents.
    Loaded,
    /// The read failed; the user was alerted and the textarea left untouched.
    Failed,
}

/// Result of a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The sequence was rendered into the log output.
    Rendered(LogSequence),
    /// A later submission started before this one finished; nothing rendered.
    Superseded {
        /// Ticket of the dropped submission.
        ticket: u64,
    },
}

/// Mediates between the sort form and the sort endpoint.
pub struct FormController<V, T> {
    config: ControllerConfig,
    view: V,
    transport: T,
    latest_ticket: Cell<u64>,
}

// Controller futures run on the single-threaded wasm executor.
#[allow(clippy::future_not_send)]
impl<V, T> FormController<V, T>
where
    V: FormView,
    T: SortTransport,
{
    /// Create a controller over an attached view and a transport.
    pub const fn new(config: ControllerConfig, view: V, transport: T) -> Self {
        Self {
            config,
            view,
            transport,
            latest_ticket: Cell::new(0),
        }
    }

    /// Active configuration.
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// View the controller renders into.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Load a picked script file into the script textarea.
    pub async fn load_script_file<F>(&self, file: Option<&F>) -> FileLoadOutcome
    where
        F: ScriptFile + ?Sized,
    {
        let Some(file) = file else {
            return FileLoadOutcome::NoFile;
        };
        match file.read_text().await {
            Ok(text) => {
                self.view.set_script(&text);
                FileLoadOutcome::Loaded
            }
            Err(err) => {
                let detail = err.user_message();
                self.view
                    .report_diagnostic(Diagnostic::error(format!("Error reading file: {detail}")));
                self.view
                    .alert(&format!("{}{detail}", self.config.file_error_prefix));
                FileLoadOutcome::Failed
            }
        }
    }

    /// Submit the current form values and render the outcome.
    ///
    /// Errors never escape: they are rendered as a single `Error: ...` line and
    /// reported on the diagnostic channel.
    pub async fn submit(&self) -> SubmitOutcome {
        let ticket = self.latest_ticket.get().wrapping_add(1);
        self.latest_ticket.set(ticket);

        let result = self.perform_submit().await;
        if let Err(err) = &result {
            self.view.report_diagnostic(Diagnostic::error(format!(
                "{err}: {}",
                err.user_message()
            )));
        }

        if self.latest_ticket.get() != ticket {
            self.view.report_diagnostic(Diagnostic::debug(format!(
                "dropping superseded sort response #{ticket}"
            )));
            return SubmitOutcome::Superseded { ticket };
        }

        let logs = result.unwrap_or_else(|err| LogSequence::from_error(&err));
        self.view.set_log_text(&logs.render());
        SubmitOutcome::Rendered(logs)
    }

    async fn perform_submit(&self) -> ControllerResult<LogSequence> {
        let payload = self.view.read_fields()?;
        let body =
            serde_json::to_string(&payload).map_err(|source| ControllerError::Encode { source })?;
        let response = self
            .transport
            .post_json(&self.config.endpoint, body)
            .await?;
        if !response.is_ok() {
            return Err(ControllerError::Status {
                status: response.status,
                body: response.body,
            });
        }
        let decoded = decode_sort_response(&response.body)?;
        Ok(LogSequence::from_server(
            decoded.logs,
            &self.config.success_message,
        ))
    }
}
