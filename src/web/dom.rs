use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use crate::model;

/// Environment facts read once at startup; a capability check, not runtime
/// polymorphism.
#[derive(Debug, Clone, Copy)]
pub(super) struct PageEnv {
    pub(super) reduced_motion: bool,
    pub(super) mobile: bool,
    pub(super) observer_supported: bool,
}

impl PageEnv {
    pub(super) fn detect(window: &Window) -> Self {
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);

        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let viewport_width = window.inner_width().ok().and_then(|w| w.as_f64());
        let mobile = model::is_mobile_device(&user_agent, viewport_width);

        let global: &JsValue = window.as_ref();
        let observer_supported =
            js_sys::Reflect::has(global, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);

        Self {
            reduced_motion,
            mobile,
            observer_supported,
        }
    }
}

pub(super) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

pub(super) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

pub(super) fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub(super) fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub(super) fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub(super) fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub(super) fn set_aria_expanded(el: &Element, expanded: bool) {
    let _ = el.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
}
