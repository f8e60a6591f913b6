#![allow(clippy::redundant_pub_crate)]
//! DOM-backed [`FormView`] for the sort page.
//!
//! # Design
//! - Resolve every element of the page contract once, at attach time.
//! - Fail fast on the first missing or mistyped element.

use async_trait::async_trait;
use gloo::console;
use tunesort_api_models::SubmissionPayload;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::config::ElementIds;
use crate::contract::{ElementKind, verify_elements};
use crate::controller::{Diagnostic, DiagnosticLevel, FormView, ScriptFile};
use crate::error::{ControllerError, ControllerResult};

/// Handles to the elements the controller drives.
pub(crate) struct DomView {
    form: HtmlFormElement,
    log_container: HtmlElement,
    log_output: HtmlElement,
    script: HtmlTextAreaElement,
    script_file: HtmlInputElement,
}

impl DomView {
    /// Look up every element of the page contract.
    pub(crate) fn attach(document: &Document, ids: &ElementIds) -> ControllerResult<Self> {
        verify_elements(ids, |id| {
            document.get_element_by_id(id).map(|element| element_kind(&element))
        })?;
        Ok(Self {
            form: cast(document, &ids.form, ElementKind::Form)?,
            log_container: cast(document, &ids.log_container, ElementKind::Html)?,
            log_output: cast(document, &ids.log_output, ElementKind::Html)?,
            script: cast(document, &ids.script, ElementKind::TextArea)?,
            script_file: cast(document, &ids.script_file, ElementKind::Input)?,
        })
    }

    pub(crate) const fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub(crate) const fn script_file_input(&self) -> &HtmlInputElement {
        &self.script_file
    }

    /// Attribute value on the form element, used for config overrides.
    pub(crate) fn form_attribute(&self, name: &str) -> Option<String> {
        self.form.get_attribute(name)
    }

    /// First file currently selected in the script picker.
    pub(crate) fn selected_file(&self) -> Option<gloo::file::File> {
        self.script_file
            .files()
            .and_then(|files| files.get(0))
            .map(gloo::file::File::from)
    }
}

fn element_kind(element: &Element) -> ElementKind {
    if element.is_instance_of::<HtmlFormElement>() {
        ElementKind::Form
    } else if element.is_instance_of::<HtmlTextAreaElement>() {
        ElementKind::TextArea
    } else if element.is_instance_of::<HtmlInputElement>() {
        ElementKind::Input
    } else if element.is_instance_of::<HtmlElement>() {
        ElementKind::Html
    } else {
        ElementKind::Foreign
    }
}

fn cast<T: JsCast>(document: &Document, id: &str, kind: ElementKind) -> ControllerResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ControllerError::MissingElement { id: id.to_string() })?
        .dyn_into::<T>()
        .map_err(|_| ControllerError::ElementType {
            id: id.to_string(),
            expected: kind.interface(),
        })
}

impl FormView for DomView {
    fn read_fields(&self) -> ControllerResult<SubmissionPayload> {
        let data = FormData::new_with_form(&self.form).map_err(|err| ControllerError::FormData {
            detail: format!("{err:?}"),
        })?;
        Ok(SubmissionPayload::from_fields(|name| data.get(name).as_string()))
    }

    fn set_script(&self, text: &str) {
        self.script.set_value(text);
    }

    fn set_log_text(&self, text: &str) {
        self.log_output.set_text_content(Some(text));
        self.log_container.set_hidden(false);
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn report_diagnostic(&self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Error => console::error!(diagnostic.message),
            DiagnosticLevel::Debug => console::debug!(diagnostic.message),
        }
    }
}

#[async_trait(?Send)]
impl ScriptFile for gloo::file::File {
    async fn read_text(&self) -> ControllerResult<String> {
        gloo::file::futures::read_as_text(self)
            .await
            .map_err(|err| ControllerError::FileRead {
                detail: err.to_string(),
            })
    }
}
