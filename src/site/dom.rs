use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::SiteError;
use crate::motion::SectionBox;
use crate::motion::effects::Rect;
use crate::surface::Surface;

/// `Surface` over live page elements.
#[derive(Clone)]
pub struct WebSurface {
    window: Window,
}

impl WebSurface {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Viewport size, falling back to a desktop-ish default when unavailable.
    pub fn viewport(&self) -> (f64, f64) {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1280.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(720.0);
        (width, height)
    }
}

impl Surface for WebSurface {
    type Node = HtmlElement;

    fn set_text(&self, node: &HtmlElement, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_class(&self, node: &HtmlElement, class: &str, on: bool) {
        let _ = node.class_list().toggle_with_force(class, on);
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) {
        let _ = node.style().set_property(property, value);
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn by_id(doc: &Document, id: &str) -> Result<HtmlElement, SiteError> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SiteError::missing(&format!("#{id}")))
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = doc.query_selector_all(selector) else {
        log::warn!("bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Like `query_all` but an empty match is an error.
pub fn query_some(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, SiteError> {
    let found = query_all(doc, selector);
    if found.is_empty() { Err(SiteError::missing(selector)) } else { Ok(found) }
}

pub fn rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
}

pub fn section_boxes(sections: &[HtmlElement]) -> Vec<SectionBox> {
    sections
        .iter()
        .map(|s| SectionBox {
            id: s.id(),
            offset_top: f64::from(s.offset_top()),
            height: f64::from(s.offset_height()),
        })
        .collect()
}

pub fn performance_now(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}
