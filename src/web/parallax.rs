use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::dom::{self, PageEnv};

const PARALLAX_SELECTOR: &str = ".hero, .parallax-cta";

/// Fixed background attachment is unreliable on phone and tablet browsers;
/// mobile-class devices get ordinary scrolling backgrounds instead.
pub(super) fn init(document: &Document, env: &PageEnv) {
    if !env.mobile {
        return;
    }
    for el in dom::query_all(document, PARALLAX_SELECTOR) {
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("background-attachment", "scroll");
        }
    }
}
