//! Controller configuration: endpoint, element ids, and message text.
//!
//! Defaults match the page shipped in `index.html`. The form element may
//! override the endpoint and success message through `data-*` attributes.

use tunesort_api_models::{DEFAULT_SUCCESS_MESSAGE, SORT_ENDPOINT};

/// Attribute on the form overriding [`ControllerConfig::endpoint`].
pub const ENDPOINT_ATTRIBUTE: &str = "data-endpoint";
/// Attribute on the form overriding [`ControllerConfig::success_message`].
pub const SUCCESS_MESSAGE_ATTRIBUTE: &str = "data-success-message";

/// Element ids the controller binds to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    /// Sort form holding the named fields.
    pub form: String,
    /// Wrapper around the log output.
    pub log_container: String,
    /// Preformatted log output region.
    pub log_output: String,
    /// Script textarea.
    pub script: String,
    /// File picker for script files.
    pub script_file: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "sortForm".into(),
            log_container: "logContainer".into(),
            log_output: "executionLogs".into(),
            script: "script".into(),
            script_file: "scriptFile".into(),
        }
    }
}

/// Runtime settings for [`crate::controller::FormController`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Path or URL submissions are posted to.
    pub endpoint: String,
    /// Line rendered when a success response has no logs.
    pub success_message: String,
    /// Prefix of the alert shown when a script file cannot be read.
    pub file_error_prefix: String,
    /// Element ids of the page contract.
    pub elements: ElementIds,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            endpoint: SORT_ENDPOINT.into(),
            success_message: DEFAULT_SUCCESS_MESSAGE.into(),
            file_error_prefix: "Error reading file: ".into(),
            elements: ElementIds::default(),
        }
    }
}

impl ControllerConfig {
    /// Layer attribute overrides on top of the current values.
    ///
    /// `lookup` receives attribute names such as [`ENDPOINT_ATTRIBUTE`]; blank
    /// values are ignored.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        if let Some(endpoint) = non_blank(ENDPOINT_ATTRIBUTE) {
            self.endpoint = endpoint;
        }
        if let Some(message) = non_blank(SUCCESS_MESSAGE_ATTRIBUTE) {
            self.success_message = message;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = ControllerConfig::default();
        assert_eq!(config.endpoint, "/sort");
        assert_eq!(config.success_message, "Operation completed successfully.");
        assert_eq!(config.elements.form, "sortForm");
        assert_eq!(config.elements.log_output, "executionLogs");
        assert_eq!(config.elements.script_file, "scriptFile");
    }

    #[test]
    fn overrides_replace_only_non_blank_values() {
        let config = ControllerConfig::default().with_overrides(|name| match name {
            ENDPOINT_ATTRIBUTE => Some(" /api/sort ".into()),
            SUCCESS_MESSAGE_ATTRIBUTE => Some("   ".into()),
            _ => None,
        });
        assert_eq!(config.endpoint, "/api/sort");
        assert_eq!(config.success_message, DEFAULT_SUCCESS_MESSAGE);
    }
}
