//! Back-to-top control and in-page anchor scrolling.

use crate::surface::Surface;

pub const VISIBLE: &str = "visible";

/// Keys that jump to the top when focus is outside a text field.
pub fn is_top_key(key: &str) -> bool {
    matches!(key, "t" | "T")
}

/// Tag names that swallow the top-key shortcut.
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("INPUT") || tag_name.eq_ignore_ascii_case("TEXTAREA")
}

pub struct BackToTop<S: Surface> {
    button: S::Node,
    threshold_px: f64,
    visible: bool,
}

impl<S: Surface> BackToTop<S> {
    pub fn new(button: S::Node, threshold_px: f64) -> Self {
        Self { button, threshold_px, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_scroll(&mut self, surface: &S, scroll_y: f64) {
        self.visible = scroll_y > self.threshold_px;
        surface.set_class(&self.button, VISIBLE, self.visible);
    }

    pub fn on_click(&self, surface: &S) {
        surface.scroll_to(0.0);
    }
}

/// What a click on an `href="#..."` link should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Bare `#` or not a fragment: let the browser handle it.
    Ignore,
    /// Suppress the default jump and scroll to the element with this id.
    ScrollTo(&'a str),
}

pub fn classify_anchor(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => AnchorAction::ScrollTo(id),
        _ => AnchorAction::Ignore,
    }
}

/// Destination that puts the target's top edge just below the fixed navbar.
pub fn anchor_destination(target_offset_top: f64, navbar_height: f64) -> f64 {
    target_offset_top - navbar_height
}
