#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Tunesort `/sort` endpoint.
//!
//! The browser controller encodes [`SubmissionPayload`] and decodes
//! [`SortResponse`] through this crate so the wire contract lives in one place.
//! Response decoding is strict: a `logs` field that is present must be an
//! array of strings.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Path of the sort endpoint relative to the page origin.
pub const SORT_ENDPOINT: &str = "/sort";

/// Content type sent with every submission.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Line rendered when a successful response carries no log lines.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully.";

/// JSON body posted to the sort endpoint.
///
/// Field values are forwarded verbatim; the backend owns validation.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Folder holding the library to sort.
    pub source_folder: String,
    /// Folder receiving the sorted library.
    pub destination_folder: String,
    /// Sort script text, typed or loaded from a local file.
    pub script: String,
    /// Raw operation mode as selected in the form.
    pub file_operation_mode: String,
}

impl SubmissionPayload {
    /// Form control names, in wire order.
    pub const FIELD_NAMES: [&'static str; 4] = [
        "sourceFolder",
        "destinationFolder",
        "script",
        "fileOperationMode",
    ];

    /// Build a payload by looking up each named form field.
    ///
    /// Fields the lookup cannot resolve are sent as empty strings.
    pub fn from_fields<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let [source, destination, script, mode] = Self::FIELD_NAMES;
        Self {
            source_folder: lookup(source).unwrap_or_default(),
            destination_folder: lookup(destination).unwrap_or_default(),
            script: lookup(script).unwrap_or_default(),
            file_operation_mode: lookup(mode).unwrap_or_default(),
        }
    }

    /// Interpret the selected mode, if it is one the backend knows about.
    #[must_use]
    pub fn operation_mode(&self) -> Option<FileOperationMode> {
        self.file_operation_mode.parse().ok()
    }
}

/// Operation modes understood by the sort backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileOperationMode {
    /// Report planned destinations without touching files.
    Preview,
    /// Move files into the destination library.
    Move,
    /// Copy files into the destination library.
    Copy,
}

impl FileOperationMode {
    /// Every mode, in the order the page offers them.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Preview, Self::Move, Self::Copy]
    }

    /// Wire spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Move => "move",
            Self::Copy => "copy",
        }
    }
}

impl fmt::Display for FileOperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode string is not a known [`FileOperationMode`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown file operation mode")]
pub struct UnknownModeError {
    /// Offending value.
    pub value: String,
}

impl FromStr for FileOperationMode {
    type Err = UnknownModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| UnknownModeError {
                value: value.to_string(),
            })
    }
}

/// Successful response envelope from the sort endpoint.
///
/// Built by [`decode_sort_response`], which validates the `logs` shape itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortResponse {
    /// Log lines produced by the sort run, if any.
    pub logs: Option<Vec<String>>,
}

/// Failures while decoding a successful sort response body.
#[derive(Debug, Error)]
pub enum LogsDecodeError {
    /// The body was not JSON at all.
    #[error("response body is not valid JSON")]
    Json {
        /// Underlying parser error.
        source: serde_json::Error,
    },
    /// The body was JSON but not an object.
    #[error("response body is not a JSON object")]
    NotAnObject,
    /// `logs` was present with a shape other than an array of strings.
    #[error("response field \"logs\" must be an array of strings")]
    InvalidLogs,
}

impl LogsDecodeError {
    /// Human-readable description including the parser detail when present.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Json { source } => format!("{self} ({source})"),
            Self::NotAnObject | Self::InvalidLogs => self.to_string(),
        }
    }
}

/// Decode a successful sort response body.
///
/// A missing or `null` `logs` field decodes to `None`.
///
/// # Errors
/// Returns [`LogsDecodeError`] when the body is not a JSON object or `logs`
/// is not an array of strings.
pub fn decode_sort_response(body: &str) -> Result<SortResponse, LogsDecodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|source| LogsDecodeError::Json { source })?;
    let Value::Object(mut object) = value else {
        return Err(LogsDecodeError::NotAnObject);
    };
    let logs = match object.remove("logs") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(line) => Ok(line),
                    _ => Err(LogsDecodeError::InvalidLogs),
                })
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(_) => return Err(LogsDecodeError::InvalidLogs),
    };
    Ok(SortResponse { logs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn payload_serializes_exactly_the_form_fields() {
        let payload = SubmissionPayload {
            source_folder: "/music/in".into(),
            destination_folder: "/music/out".into(),
            script: "ARTIST".into(),
            file_operation_mode: "copy".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected = SubmissionPayload::FIELD_NAMES.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected);
        assert_eq!(object["sourceFolder"], "/music/in");
        assert_eq!(object["fileOperationMode"], "copy");
    }

    #[test]
    fn from_fields_defaults_missing_values_to_empty() {
        let fields: HashMap<&str, &str> =
            HashMap::from([("sourceFolder", "/in"), ("script", "ALBUM\n")]);
        let payload =
            SubmissionPayload::from_fields(|name| fields.get(name).map(|v| (*v).to_string()));
        assert_eq!(payload.source_folder, "/in");
        assert_eq!(payload.destination_folder, "");
        assert_eq!(payload.script, "ALBUM\n");
        assert_eq!(payload.file_operation_mode, "");
    }

    #[test]
    fn modes_parse_case_insensitively() {
        assert_eq!("Move".parse(), Ok(FileOperationMode::Move));
        assert_eq!(" preview ".parse(), Ok(FileOperationMode::Preview));
        assert!("shortcut".parse::<FileOperationMode>().is_err());
        let payload = SubmissionPayload {
            file_operation_mode: "COPY".into(),
            ..SubmissionPayload::default()
        };
        assert_eq!(payload.operation_mode(), Some(FileOperationMode::Copy));
    }

    #[test]
    fn decode_accepts_logs_and_missing_logs() {
        let response = decode_sort_response(r#"{"logs":["a","b"]}"#).unwrap();
        assert_eq!(response.logs, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(decode_sort_response("{}").unwrap().logs, None);
        assert_eq!(decode_sort_response(r#"{"logs":null}"#).unwrap().logs, None);
    }

    #[test]
    fn decode_rejects_malformed_bodies() {
        assert!(matches!(
            decode_sort_response("<html>"),
            Err(LogsDecodeError::Json { .. })
        ));
        assert!(matches!(
            decode_sort_response("[1, 2]"),
            Err(LogsDecodeError::NotAnObject)
        ));
        assert!(matches!(
            decode_sort_response(r#"{"logs":"done"}"#),
            Err(LogsDecodeError::InvalidLogs)
        ));
        assert!(matches!(
            decode_sort_response(r#"{"logs":["ok", 3]}"#),
            Err(LogsDecodeError::InvalidLogs)
        ));
    }

    #[test]
    fn decode_error_detail_includes_parser_context() {
        let Err(err) = decode_sort_response("not json") else {
            panic!("expected a decode failure");
        };
        let detail = err.detail();
        assert!(detail.starts_with("response body is not valid JSON ("));
        assert_eq!(
            LogsDecodeError::InvalidLogs.detail(),
            "response field \"logs\" must be an array of strings"
        );
    }
}
