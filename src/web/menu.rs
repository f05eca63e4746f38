use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use super::dom;
use crate::model::{self, MenuState, TabDirection};

const TOGGLE_ID: &str = "navToggle";
const PANEL_ID: &str = "mobileMenu";
const OPEN_CLASS: &str = "open";
const LINK_SELECTOR: &str = "a";
const FOCUSABLE_SELECTOR: &str = "a, button";

/// Wires the hamburger menu: open/close from the toggle button, close on
/// Escape or any menu link, body scroll lock, and a focus trap that keeps
/// keyboard focus inside the open panel. Inert unless both the toggle and
/// the panel exist.
pub(super) fn init(document: &Document) {
    let Some(toggle) = document
        .get_element_by_id(TOGGLE_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(panel) = document.get_element_by_id(PANEL_ID) else {
        return;
    };

    let controller = MenuController {
        state: Rc::new(Cell::new(MenuState::Closed)),
        document: document.clone(),
        toggle,
        panel,
    };

    {
        let ctl = controller.clone();
        let listener = Closure::wrap(Box::new(move || {
            if ctl.state.get().is_open() {
                ctl.close();
            } else {
                ctl.open();
            }
        }) as Box<dyn FnMut()>);
        let _ = controller
            .toggle
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        listener.forget();
    }

    // Activating any link in the panel closes the menu.
    for link in dom::query_all_in(&controller.panel, LINK_SELECTOR) {
        let ctl = controller.clone();
        let listener = Closure::wrap(Box::new(move || ctl.close()) as Box<dyn FnMut()>);
        let _ = link.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        listener.forget();
    }

    // Escape and the focus trap only act while the menu is open.
    {
        let ctl = controller.clone();
        let listener = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            if !ctl.state.get().is_open() {
                return;
            }
            match ev.key().as_str() {
                "Escape" => ctl.close(),
                "Tab" => ctl.trap_focus(&ev),
                _ => {}
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = document
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        listener.forget();
    }
}

#[derive(Clone)]
struct MenuController {
    state: Rc<Cell<MenuState>>,
    document: Document,
    toggle: HtmlElement,
    panel: Element,
}

impl MenuController {
    fn open(&self) {
        self.state.set(MenuState::Open);
        dom::add_class(&self.toggle, OPEN_CLASS);
        dom::set_aria_expanded(&self.toggle, true);
        dom::add_class(&self.panel, OPEN_CLASS);
        self.set_scroll_lock(true);
        self.focus_first_link_deferred();
    }

    fn close(&self) {
        self.state.set(MenuState::Closed);
        dom::remove_class(&self.toggle, OPEN_CLASS);
        dom::set_aria_expanded(&self.toggle, false);
        dom::remove_class(&self.panel, OPEN_CLASS);
        self.set_scroll_lock(false);
        let _ = self.toggle.focus();
    }

    fn set_scroll_lock(&self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        if locked {
            let _ = body.style().set_property("overflow", "hidden");
        } else {
            let _ = body.style().remove_property("overflow");
        }
    }

    /// Moves focus to the first menu link after the opening transition has
    /// had time to register. Fire-and-forget; there is nothing to cancel.
    fn focus_first_link_deferred(&self) {
        let Some(first) = dom::query_all_in(&self.panel, LINK_SELECTOR)
            .into_iter()
            .next()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let callback = Closure::wrap(Box::new(move || {
            let _ = first.focus();
        }) as Box<dyn FnMut()>);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            model::MENU_FOCUS_DELAY_MS,
        );
        callback.forget();
    }

    fn trap_focus(&self, ev: &KeyboardEvent) {
        let focusable: Vec<HtmlElement> = dom::query_all_in(&self.panel, FOCUSABLE_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();

        let active = self.document.active_element();
        let active_index = active.as_ref().and_then(|active| {
            focusable.iter().position(|el| {
                let el: &Element = el.as_ref();
                el == active
            })
        });

        let direction = TabDirection::from_shift_key(ev.shift_key());
        if let Some(target) = model::focus_wrap(direction, active_index, focusable.len()) {
            ev.prevent_default();
            let _ = focusable[target].focus();
        }
    }
}
