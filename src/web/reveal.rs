use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom::{self, PageEnv};
use crate::model::{self, RevealMode};

const CANDIDATE_SELECTOR: &str = ".fade-up";
const VISIBLE_CLASS: &str = "visible";

/// Reveals `.fade-up` elements as they enter the viewport, or all at once
/// when motion is reduced or viewport observation is unavailable. A revealed
/// element is never re-observed or un-revealed.
pub(super) fn init(document: &Document, env: &PageEnv) {
    let candidates = dom::query_all(document, CANDIDATE_SELECTOR);
    if candidates.is_empty() {
        return;
    }

    match RevealMode::select(env.reduced_motion, env.observer_supported) {
        RevealMode::Immediate => {
            for el in &candidates {
                dom::add_class(el, VISIBLE_CLASS);
            }
        }
        // The capability probe said the API exists; a construction failure
        // here leaves the candidates unrevealed.
        RevealMode::Observed => {
            let _ = observe(&candidates);
        }
    }
}

fn observe(candidates: &[Element]) -> Result<(), String> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                dom::add_class(&target, VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(model::REVEAL_THRESHOLD));
    options.set_root_margin(model::REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| "intersection observer: constructor threw".to_string())?;
    callback.forget();

    for el in candidates {
        observer.observe(el);
    }
    Ok(())
}
