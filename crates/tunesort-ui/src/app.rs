//! Page bootstrap: attach the controller once the document is parsed.

use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::config::ControllerConfig;
use crate::contract::document_is_loading;
use crate::controller::FormController;
use crate::dom::DomView;
use crate::error::ControllerResult;
use crate::transport::FetchTransport;

type PageController = FormController<DomView, FetchTransport>;

/// Entry point invoked by the wasm binary.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = gloo::utils::document();
    if document_is_loading(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", |_| {
            boot(&gloo::utils::document());
        })
        .forget();
    } else {
        boot(&document);
    }
}

fn boot(document: &Document) {
    match mount(document) {
        // Listeners live as long as the page.
        Ok(listeners) => listeners.into_iter().for_each(EventListener::forget),
        Err(err) => console::error!("sort form controller failed to attach", err.user_message()),
    }
}

fn mount(document: &Document) -> ControllerResult<Vec<EventListener>> {
    let defaults = ControllerConfig::default();
    let view = DomView::attach(document, &defaults.elements)?;
    let config = defaults.with_overrides(|name| view.form_attribute(name));
    let controller = Rc::new(FormController::new(config, view, FetchTransport));

    let on_change = {
        let handler: Rc<PageController> = Rc::clone(&controller);
        EventListener::new(controller.view().script_file_input(), "change", move |_| {
            let controller = Rc::clone(&handler);
            spawn_local(async move {
                let file = controller.view().selected_file();
                controller.load_script_file(file.as_ref()).await;
            });
        })
    };

    let on_submit = {
        let handler = Rc::clone(&controller);
        EventListener::new_with_options(
            controller.view().form(),
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let controller = Rc::clone(&handler);
                spawn_local(async move {
                    controller.submit().await;
                });
            },
        )
    };

    Ok(vec![on_change, on_submit])
}
