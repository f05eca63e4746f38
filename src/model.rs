//! Interaction state and policy shared between wasm and native builds.
//!
//! Keeping the decision logic out of the wasm-only `web` module allows the
//! menu, reveal, and scroll behaviors to be unit-tested on the host.

/// Vertical scroll offset above which the navbar switches to its compact
/// "scrolled" treatment.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Padding kept between the viewport top (below the navbar) and an anchor
/// target after a smooth scroll.
pub const ANCHOR_SCROLL_PADDING_PX: f64 = 20.0;

/// Delay before moving keyboard focus into the freshly opened mobile menu,
/// long enough for the opening transition to register.
pub const MENU_FOCUS_DELAY_MS: i32 = 100;

/// Fraction of a reveal candidate that must enter the viewport before it is
/// marked visible.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Root margin for the reveal observer; the bottom shrink keeps elements
/// from revealing while still hugging the viewport edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Viewport widths below this are treated as mobile regardless of user agent.
pub const MOBILE_VIEWPORT_MAX_PX: f64 = 768.0;

const MOBILE_UA_MARKERS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

/// Whether the navbar should carry its "scrolled" marker at this offset.
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    pub fn from_shift_key(shift: bool) -> Self {
        if shift {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        }
    }
}

/// Focus-trap wrap decision for a Tab press inside the open menu.
///
/// `active` is the position of the currently focused element among the
/// menu's focusable elements, if focus is on one of them. Returns the index
/// focus must jump to when the press would otherwise escape the menu;
/// `None` defers to the browser's normal tab order.
pub fn focus_wrap(direction: TabDirection, active: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match direction {
        TabDirection::Forward if active == Some(count - 1) => Some(0),
        TabDirection::Backward if active == Some(0) => Some(count - 1),
        _ => None,
    }
}

/// How reveal-on-scroll candidates are shown, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Watch each candidate and mark it visible when it enters the viewport.
    Observed,
    /// Mark every candidate visible immediately, with no animation.
    Immediate,
}

impl RevealMode {
    pub fn select(reduced_motion: bool, observer_supported: bool) -> Self {
        if !reduced_motion && observer_supported {
            RevealMode::Observed
        } else {
            RevealMode::Immediate
        }
    }
}

/// Mobile classification: phone/tablet user agent, or a narrow viewport.
/// `viewport_width` is `None` when the width cannot be read.
pub fn is_mobile_device(user_agent: &str, viewport_width: Option<f64>) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker))
        || viewport_width.is_some_and(|w| w < MOBILE_VIEWPORT_MAX_PX)
}

/// Outcome of activating an accordion header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionToggle {
    /// Whether the activated panel ends up open.
    pub open_after: bool,
    /// Whether other open panels in the same category must close first.
    pub close_siblings: bool,
}

pub fn accordion_toggle(was_open: bool) -> AccordionToggle {
    AccordionToggle {
        open_after: !was_open,
        close_siblings: !was_open,
    }
}

/// Distance from the document top to scroll an anchor target to, accounting
/// for the fixed navbar when one exists.
pub fn anchor_scroll_offset(navbar_height: Option<f64>) -> f64 {
    navbar_height.unwrap_or(0.0) + ANCHOR_SCROLL_PADDING_PX
}

/// Fragment identifier of an in-page anchor href. A bare `#` names no
/// element and a non-fragment href is not an in-page anchor.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_marker_tracks_threshold_crossings() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.1));
        assert!(navbar_scrolled(800.0));

        // Repeated crossings in either direction are monotonic.
        for (offset, expected) in [
            (0.0, false),
            (120.0, true),
            (49.0, false),
            (51.0, true),
            (50.0, false),
        ] {
            assert_eq!(navbar_scrolled(offset), expected, "offset {offset}");
        }
    }

    #[test]
    fn menu_state_round_trips() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert!(state.toggled().is_open());
        assert_eq!(state.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn focus_wrap_cycles_at_the_edges() {
        for count in 2..6 {
            assert_eq!(
                focus_wrap(TabDirection::Forward, Some(count - 1), count),
                Some(0),
                "forward from last, count {count}"
            );
            assert_eq!(
                focus_wrap(TabDirection::Backward, Some(0), count),
                Some(count - 1),
                "backward from first, count {count}"
            );
        }
    }

    #[test]
    fn focus_wrap_defers_everywhere_else() {
        assert_eq!(focus_wrap(TabDirection::Forward, Some(1), 4), None);
        assert_eq!(focus_wrap(TabDirection::Backward, Some(2), 4), None);
        assert_eq!(focus_wrap(TabDirection::Forward, Some(0), 4), None);
        assert_eq!(focus_wrap(TabDirection::Backward, Some(3), 4), None);

        // Focus outside the menu's focusable set defers to the browser.
        assert_eq!(focus_wrap(TabDirection::Forward, None, 4), None);
        assert_eq!(focus_wrap(TabDirection::Backward, None, 4), None);
    }

    #[test]
    fn focus_wrap_handles_tiny_menus() {
        assert_eq!(focus_wrap(TabDirection::Forward, None, 0), None);
        assert_eq!(focus_wrap(TabDirection::Backward, None, 0), None);

        // A single focusable element wraps onto itself, keeping focus inside.
        assert_eq!(focus_wrap(TabDirection::Forward, Some(0), 1), Some(0));
        assert_eq!(focus_wrap(TabDirection::Backward, Some(0), 1), Some(0));
    }

    #[test]
    fn reveal_mode_matrix() {
        assert_eq!(RevealMode::select(false, true), RevealMode::Observed);
        assert_eq!(RevealMode::select(true, true), RevealMode::Immediate);
        assert_eq!(RevealMode::select(false, false), RevealMode::Immediate);
        assert_eq!(RevealMode::select(true, false), RevealMode::Immediate);
    }

    #[test]
    fn mobile_classification() {
        const IPHONE_UA: &str =
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";
        const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

        assert!(is_mobile_device(IPHONE_UA, Some(1024.0)));
        assert!(is_mobile_device(ANDROID_UA, Some(1024.0)));
        assert!(is_mobile_device(&ANDROID_UA.to_uppercase(), Some(1024.0)));

        assert!(!is_mobile_device(DESKTOP_UA, Some(1280.0)));
        assert!(is_mobile_device(DESKTOP_UA, Some(767.9)));

        // The cutoff itself is not mobile, and an unreadable width falls
        // back to the user agent alone.
        assert!(!is_mobile_device(DESKTOP_UA, Some(MOBILE_VIEWPORT_MAX_PX)));
        assert!(!is_mobile_device(DESKTOP_UA, None));
        assert!(is_mobile_device(IPHONE_UA, None));
    }

    fn apply_toggle(group: &mut [bool], idx: usize) {
        let toggle = accordion_toggle(group[idx]);
        if toggle.close_siblings {
            for (i, open) in group.iter_mut().enumerate() {
                if i != idx {
                    *open = false;
                }
            }
        }
        group[idx] = toggle.open_after;
    }

    #[test]
    fn accordion_group_keeps_at_most_one_open() {
        let mut group = [false; 4];

        apply_toggle(&mut group, 0);
        assert_eq!(group, [true, false, false, false]);

        // Opening B closes the already-open A.
        apply_toggle(&mut group, 2);
        assert_eq!(group, [false, false, true, false]);

        // Closing the open panel touches nothing else.
        apply_toggle(&mut group, 2);
        assert_eq!(group, [false; 4]);

        for step in [1, 3, 0, 2, 2, 1] {
            apply_toggle(&mut group, step);
            assert!(group.iter().filter(|open| **open).count() <= 1);
        }
    }

    #[test]
    fn accordion_groups_are_independent() {
        let mut exterior = [false; 3];
        let mut interior = [false; 3];

        apply_toggle(&mut exterior, 1);
        apply_toggle(&mut interior, 2);

        // Each category keeps its own open panel.
        assert_eq!(exterior, [false, true, false]);
        assert_eq!(interior, [false, false, true]);
    }

    #[test]
    fn anchor_offset_accounts_for_the_navbar() {
        assert_eq!(anchor_scroll_offset(Some(64.0)), 84.0);
        assert_eq!(anchor_scroll_offset(None), 20.0);
    }

    #[test]
    fn anchor_fragment_parsing() {
        assert_eq!(anchor_target_id("#section2"), Some("section2"));
        assert_eq!(anchor_target_id("#contact"), Some("contact"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("/pricing"), None);
        assert_eq!(anchor_target_id("https://example.com/#x"), None);
    }
}
