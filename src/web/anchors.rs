use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::dom::{self, PageEnv};
use crate::model;

const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
const NAVBAR_SELECTOR: &str = ".navbar";

/// Intercepts in-page anchor clicks and scrolls to the target below the
/// fixed navbar. Links whose fragment names no element keep the browser's
/// default navigation.
pub(super) fn init(window: &Window, document: &Document, env: &PageEnv) {
    let behavior = if env.reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    };

    for link in dom::query_all(document, ANCHOR_SELECTOR) {
        let listener = {
            let window = window.clone();
            let document = document.clone();
            let link = link.clone();
            Closure::wrap(Box::new(move |ev: Event| {
                follow(&window, &document, &link, &ev, behavior);
            }) as Box<dyn FnMut(Event)>)
        };
        let _ = link.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        listener.forget();
    }
}

fn follow(window: &Window, document: &Document, link: &Element, ev: &Event, behavior: ScrollBehavior) {
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(id) = model::anchor_target_id(&href) else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    ev.prevent_default();

    // Navbar height is read per click; the bar resizes with scroll state.
    let navbar_height = document
        .query_selector(NAVBAR_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()));

    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + page_offset
        - model::anchor_scroll_offset(navbar_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(behavior);
    window.scroll_to_with_scroll_to_options(&options);
}
