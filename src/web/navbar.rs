use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use super::dom;
use crate::model;

const NAVBAR_SELECTOR: &str = ".navbar";
const SCROLLED_CLASS: &str = "scrolled";

/// Toggles the navbar's compact treatment as the page crosses the scroll
/// threshold. Applied once at startup and on every scroll event after.
pub(super) fn init(window: &Window, document: &Document) {
    let Ok(Some(navbar)) = document.query_selector(NAVBAR_SELECTOR) else {
        return;
    };

    apply(window, &navbar);

    let listener = {
        let window = window.clone();
        let navbar = navbar.clone();
        Closure::wrap(Box::new(move || apply(&window, &navbar)) as Box<dyn FnMut()>)
    };

    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        listener.as_ref().unchecked_ref(),
        &options,
    );
    listener.forget();
}

fn apply(window: &Window, navbar: &Element) {
    let offset = window.scroll_y().unwrap_or(0.0);
    dom::set_class(navbar, SCROLLED_CLASS, model::navbar_scrolled(offset));
}
