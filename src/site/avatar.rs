//! Profile picture fallback: a gradient tile with the owner's initials.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::listeners::ListenerSet;
use crate::config::AvatarStyle;
use crate::error::SiteError;
use crate::motion::effects::{initials, needs_fallback};

/// Draw the fallback tile and return it as a data URL.
pub fn render_placeholder(doc: &Document, style: &AvatarStyle) -> Result<String, SiteError> {
    let canvas: HtmlCanvasElement = doc
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| SiteError::Js("canvas element expected".into()))?;
    canvas.set_width(style.size_px);
    canvas.set_height(style.size_px);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .and_then(|obj| obj.dyn_into().ok())
        .ok_or_else(|| SiteError::Js("2d context unavailable".into()))?;

    let side = f64::from(style.size_px);
    let gradient = ctx.create_linear_gradient(0.0, 0.0, side, side);
    gradient.add_color_stop(0.0, &style.gradient_from)?;
    gradient.add_color_stop(1.0, &style.gradient_to)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, side, side);

    ctx.set_fill_style_str(&style.text_color);
    ctx.set_font(&style.font);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&initials(&style.display_name), side / 2.0, side / 2.0)?;

    Ok(canvas.to_data_url()?)
}

pub fn install_avatar(
    doc: &Document,
    id: &str,
    style: AvatarStyle,
    listeners: &mut ListenerSet,
) -> Result<(), SiteError> {
    let img: HtmlImageElement = doc
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| SiteError::missing(&format!("#{id}")))?;

    // The generated URL cannot fail, but guard against an error loop anyway.
    let swapped = Rc::new(Cell::new(false));
    let swap = {
        let doc = doc.clone();
        let img = img.clone();
        move || {
            if swapped.replace(true) {
                return;
            }
            match render_placeholder(&doc, &style) {
                Ok(url) => img.set_src(&url),
                Err(e) => log::warn!("avatar fallback failed: {e}"),
            }
        }
    };

    if needs_fallback(&img.src(), img.complete(), img.natural_width()) {
        swap();
        return Ok(());
    }
    listeners.on(&img, "error", move |_| swap())
}
