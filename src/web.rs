//! Browser wiring for the interaction layer.
//!
//! Each submodule owns one behavior and attaches its own listeners at
//! startup. The environment snapshot is taken once; nothing re-probes
//! capabilities per event.

mod accordion;
mod anchors;
mod dom;
mod menu;
mod navbar;
mod parallax;
mod reveal;

use dom::PageEnv;

pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let env = PageEnv::detect(&window);

    navbar::init(&window, &document);
    menu::init(&document);
    reveal::init(&document, &env);
    accordion::init(&document);
    parallax::init(&document, &env);
    anchors::init(&window, &document, &env);
}
