use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::dom;
use crate::model;

const HEADER_SELECTOR: &str = ".pkg-header";
const PANEL_SELECTOR: &str = ".pkg-accordion";
const GROUP_SELECTOR: &str = ".pkg-category";
const OPEN_PANEL_SELECTOR: &str = ".pkg-accordion.open";
const OPEN_CLASS: &str = "open";

/// Package accordions: a header click toggles its panel, and opening a panel
/// closes every other open panel in the same category.
pub(super) fn init(document: &Document) {
    for header in dom::query_all(document, HEADER_SELECTOR) {
        let listener = {
            let header = header.clone();
            Closure::wrap(Box::new(move || activate(&header)) as Box<dyn FnMut()>)
        };
        let _ = header.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        listener.forget();
    }
}

fn activate(header: &Element) {
    let Ok(Some(panel)) = header.closest(PANEL_SELECTOR) else {
        return;
    };

    let toggle = model::accordion_toggle(dom::has_class(&panel, OPEN_CLASS));

    // Panels without an enclosing category are exempt from exclusivity.
    if toggle.close_siblings {
        if let Ok(Some(group)) = panel.closest(GROUP_SELECTOR) {
            for open_panel in dom::query_all_in(&group, OPEN_PANEL_SELECTOR) {
                if open_panel == panel {
                    continue;
                }
                dom::remove_class(&open_panel, OPEN_CLASS);
                if let Ok(Some(sibling_header)) = open_panel.query_selector(HEADER_SELECTOR) {
                    dom::set_aria_expanded(&sibling_header, false);
                }
            }
        }
    }

    dom::set_class(&panel, OPEN_CLASS, toggle.open_after);
    dom::set_aria_expanded(header, toggle.open_after);
}
