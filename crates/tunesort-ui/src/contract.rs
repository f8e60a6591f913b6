//! Page contract: which elements the controller needs, in lookup order, and
//! when the page is ready for them.

use crate::config::ElementIds;
use crate::error::{ControllerError, ControllerResult};

/// Kind of element found in (or required by) the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// `<form>`.
    Form,
    /// `<textarea>`.
    TextArea,
    /// `<input>`.
    Input,
    /// Any other HTML element.
    Html,
    /// A non-HTML element (SVG, MathML).
    Foreign,
}

impl ElementKind {
    /// DOM interface name used in error context.
    #[must_use]
    pub const fn interface(self) -> &'static str {
        match self {
            Self::Form => "HTMLFormElement",
            Self::TextArea => "HTMLTextAreaElement",
            Self::Input => "HTMLInputElement",
            Self::Html => "HTMLElement",
            Self::Foreign => "Element",
        }
    }

    /// Whether an element of kind `self` can serve where `required` is needed.
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        match required {
            Self::Html => self != Self::Foreign,
            _ => self == required,
        }
    }
}

/// Whether a `document.readyState` value means parsing is still in progress.
///
/// While loading, attaching must wait for `DOMContentLoaded`; afterwards the
/// event has already fired and attaching happens immediately.
#[must_use]
pub fn document_is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Required elements as `(id, kind)` pairs, in lookup order.
#[must_use]
pub fn required_elements(ids: &ElementIds) -> [(&str, ElementKind); 5] {
    [
        (ids.form.as_str(), ElementKind::Form),
        (ids.log_container.as_str(), ElementKind::Html),
        (ids.log_output.as_str(), ElementKind::Html),
        (ids.script.as_str(), ElementKind::TextArea),
        (ids.script_file.as_str(), ElementKind::Input),
    ]
}

/// Check every required element, stopping at the first failure.
///
/// `find` reports the kind of the element with the given id, or `None` when
/// the page has no such element.
///
/// # Errors
/// Returns [`ControllerError::MissingElement`] for the first absent id, or
/// [`ControllerError::ElementType`] for the first element of the wrong kind.
pub fn verify_elements<F>(ids: &ElementIds, find: F) -> ControllerResult<()>
where
    F: Fn(&str) -> Option<ElementKind>,
{
    for (id, required) in required_elements(ids) {
        let found = find(id).ok_or_else(|| ControllerError::MissingElement { id: id.to_string() })?;
        if !found.satisfies(required) {
            return Err(ControllerError::ElementType {
                id: id.to_string(),
                expected: required.interface(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn page() -> HashMap<&'static str, ElementKind> {
        HashMap::from([
            ("sortForm", ElementKind::Form),
            ("logContainer", ElementKind::Html),
            ("executionLogs", ElementKind::Html),
            ("script", ElementKind::TextArea),
            ("scriptFile", ElementKind::Input),
        ])
    }

    #[test]
    fn only_the_loading_state_defers_attach() {
        assert!(document_is_loading("loading"));
        assert!(!document_is_loading("interactive"));
        assert!(!document_is_loading("complete"));
    }

    #[test]
    fn complete_page_passes() {
        let page = page();
        let result = verify_elements(&ElementIds::default(), |id| page.get(id).copied());
        assert!(result.is_ok());
    }

    #[test]
    fn first_missing_element_is_reported() {
        let mut page = page();
        page.remove("executionLogs");
        page.remove("scriptFile");
        let err = verify_elements(&ElementIds::default(), |id| page.get(id).copied()).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::MissingElement { ref id } if id == "executionLogs"
        ));
    }

    #[test]
    fn wrong_element_kind_is_reported() {
        let mut page = page();
        page.insert("script", ElementKind::Input);
        let err = verify_elements(&ElementIds::default(), |id| page.get(id).copied()).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::ElementType { ref id, expected: "HTMLTextAreaElement" } if id == "script"
        ));
    }

    #[test]
    fn containers_accept_any_html_element_but_not_foreign_ones() {
        assert!(ElementKind::Form.satisfies(ElementKind::Html));
        assert!(!ElementKind::Foreign.satisfies(ElementKind::Html));
        let mut page = page();
        page.insert("logContainer", ElementKind::Foreign);
        let err = verify_elements(&ElementIds::default(), |id| page.get(id).copied()).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::ElementType { expected: "HTMLElement", .. }
        ));
    }
}
