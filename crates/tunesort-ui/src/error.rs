//! Controller error types.
//!
//! # Design
//! - Constant error messages; context lives in fields.
//! - [`ControllerError::user_message`] is the only place that turns an error
//!   into text shown on the page.

use thiserror::Error;
use tunesort_api_models::LogsDecodeError;

/// Result alias for controller operations.
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Failures surfaced by the sort form controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A required page element was not found.
    #[error("required page element missing")]
    MissingElement {
        /// Element id that was looked up.
        id: String,
    },
    /// A page element exists but is not the expected kind of element.
    #[error("page element has unexpected type")]
    ElementType {
        /// Element id that was looked up.
        id: String,
        /// Element interface the controller needs.
        expected: &'static str,
    },
    /// Current form values could not be collected.
    #[error("form values unavailable")]
    FormData {
        /// Browser-provided detail.
        detail: String,
    },
    /// The selected script file could not be read.
    #[error("script file read failed")]
    FileRead {
        /// Reader-provided detail.
        detail: String,
    },
    /// The payload could not be encoded as JSON.
    #[error("submission payload encoding failed")]
    Encode {
        /// Underlying serializer error.
        source: serde_json::Error,
    },
    /// The request never produced a response.
    #[error("sort request failed")]
    Transport {
        /// Transport-provided detail.
        detail: String,
    },
    /// The endpoint answered with a non-success status.
    #[error("sort endpoint returned an error status")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// A success response could not be decoded.
    #[error("sort response could not be decoded")]
    Decode {
        /// Underlying decode error.
        source: LogsDecodeError,
    },
}

impl ControllerError {
    /// Text shown to the user after `"Error: "`.
    ///
    /// Status errors show the raw response body unchanged.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingElement { id } => format!("missing page element #{id}"),
            Self::ElementType { id, expected } => format!("page element #{id} is not {expected}"),
            Self::FormData { detail } | Self::FileRead { detail } | Self::Transport { detail } => {
                detail.clone()
            }
            Self::Encode { source } => format!("{self} ({source})"),
            Self::Status { body, .. } => body.clone(),
            Self::Decode { source } => source.detail(),
        }
    }
}

impl From<LogsDecodeError> for ControllerError {
    fn from(source: LogsDecodeError) -> Self {
        Self::Decode { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn status_errors_surface_the_raw_body() {
        let err = ControllerError::Status {
            status: 400,
            body: "bad folder".into(),
        };
        assert_eq!(err.user_message(), "bad folder");
        assert_eq!(err.to_string(), "sort endpoint returned an error status");
    }

    #[test]
    fn detail_errors_surface_their_detail() {
        let err = ControllerError::Transport {
            detail: "Failed to fetch".into(),
        };
        assert_eq!(err.user_message(), "Failed to fetch");
        let err = ControllerError::MissingElement {
            id: "sortForm".into(),
        };
        assert_eq!(err.user_message(), "missing page element #sortForm");
    }

    #[test]
    fn decode_errors_keep_their_source() {
        let err = ControllerError::from(LogsDecodeError::InvalidLogs);
        assert!(err.source().is_some());
        assert_eq!(
            err.user_message(),
            "response field \"logs\" must be an array of strings"
        );
    }
}
