//! Event handler installation, one function per page behaviour.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, MouseEvent, Window};

use super::dom::{WebSurface, by_id, query_all, query_some, rect, section_boxes};
use super::listeners::ListenerSet;
use super::timers::{Timers, TypingLoop};
use crate::config::{ScrollThresholds, Selectors, SiteConfig};
use crate::error::SiteError;
use crate::motion::effects::{self, RIPPLE_KEYFRAMES, RIPPLE_MS, Ripple};
use crate::motion::scroll::{AnchorAction, anchor_destination, classify_anchor, is_text_entry, is_top_key};
use crate::motion::{BackToTop, NavController, NavLink, TextCycler, Typewriter};
use crate::surface::Surface;

pub type SharedNav = Rc<RefCell<NavController<WebSurface>>>;

const RIPPLE_STYLE_ID: &str = "ripple-keyframes";

pub fn install_navigation(
    window: &Window,
    doc: &Document,
    sel: &Selectors,
    thresholds: ScrollThresholds,
    surface: &WebSurface,
    listeners: &mut ListenerSet,
) -> Result<SharedNav, SiteError> {
    let navbar = by_id(doc, &sel.navbar_id)?;
    let toggle = by_id(doc, &sel.nav_toggle_id)?;
    let panel = by_id(doc, &sel.nav_menu_id)?;
    let links: Vec<_> = query_all(doc, &sel.nav_link)
        .into_iter()
        .map(|node| {
            let href = node.get_attribute("href").unwrap_or_default();
            NavLink { node, href }
        })
        .collect();
    let link_nodes: Vec<_> = links.iter().map(|l| l.node.clone()).collect();
    let sections = query_all(doc, &sel.sections);

    let nav: SharedNav =
        Rc::new(RefCell::new(NavController::new(navbar, toggle.clone(), panel, links, thresholds)));

    {
        let nav = nav.clone();
        let surface = surface.clone();
        listeners.on(&toggle, "click", move |_| nav.borrow_mut().toggle_menu(&surface))?;
    }
    for link in &link_nodes {
        let nav = nav.clone();
        let surface = surface.clone();
        listeners.on(link, "click", move |_| nav.borrow_mut().close_menu(&surface))?;
    }
    {
        let nav = nav.clone();
        let surface = surface.clone();
        listeners.on(window, "scroll", move |_| {
            let boxes = section_boxes(&sections);
            nav.borrow_mut().on_scroll(&surface, surface.scroll_y(), &boxes);
        })?;
    }
    Ok(nav)
}

pub fn start_typing(
    window: &Window,
    doc: &Document,
    config: &SiteConfig,
    surface: &WebSurface,
) -> Result<TypingLoop, SiteError> {
    let node = by_id(doc, &config.selectors.typing_id)?;
    let cycler = TextCycler::new(config.phrases.as_slice(), config.typing)
        .ok_or_else(|| SiteError::Config("no phrases to type".into()))?;
    let typewriter = Typewriter::new(node, cycler);
    Ok(TypingLoop::start(window.clone(), surface.clone(), typewriter))
}

pub fn install_back_to_top(
    window: &Window,
    doc: &Document,
    sel: &Selectors,
    threshold_px: f64,
    surface: &WebSurface,
    listeners: &mut ListenerSet,
) -> Result<(), SiteError> {
    let button = by_id(doc, &sel.back_to_top_id)?;
    let control = Rc::new(RefCell::new(BackToTop::<WebSurface>::new(button.clone(), threshold_px)));
    {
        let control = control.clone();
        let surface = surface.clone();
        listeners.on(window, "scroll", move |_| {
            control.borrow_mut().on_scroll(&surface, surface.scroll_y())
        })?;
    }
    let surface = surface.clone();
    listeners.on(&button, "click", move |_| control.borrow().on_click(&surface))
}

pub fn install_anchor_scroll(
    doc: &Document,
    sel: &Selectors,
    surface: &WebSurface,
    listeners: &mut ListenerSet,
) -> Result<(), SiteError> {
    for link in query_some(doc, &sel.anchors)? {
        let doc = doc.clone();
        let navbar_id = sel.navbar_id.clone();
        let surface = surface.clone();
        let href_source = link.clone();
        listeners.on(&link, "click", move |evt: Event| {
            let href = href_source.get_attribute("href").unwrap_or_default();
            let AnchorAction::ScrollTo(id) = classify_anchor(&href) else {
                return;
            };
            evt.prevent_default();
            let Ok(target) = by_id(&doc, id) else {
                log::debug!("anchor target #{id} not on page");
                return;
            };
            let navbar_height = by_id(&doc, &navbar_id).map(|n| n.offset_height()).unwrap_or(0);
            surface.scroll_to(anchor_destination(
                f64::from(target.offset_top()),
                f64::from(navbar_height),
            ));
        })?;
    }
    Ok(())
}

/// `t` jumps to the top, Escape closes the mobile menu.
pub fn install_keyboard(
    doc: &Document,
    nav: Option<SharedNav>,
    surface: &WebSurface,
    listeners: &mut ListenerSet,
) -> Result<(), SiteError> {
    let surface = surface.clone();
    listeners.on(doc, "keydown", move |evt: Event| {
        let Some(evt) = evt.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = evt.key();
        if is_top_key(&key) {
            let in_text_field = evt
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| is_text_entry(&el.tag_name()));
            if !in_text_field {
                surface.scroll_to(0.0);
            }
        }
        if key == "Escape" {
            if let Some(nav) = &nav {
                nav.borrow_mut().close_menu(&surface);
            }
        }
    })
}

fn inject_ripple_keyframes(doc: &Document) -> Result<(), SiteError> {
    if doc.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return Ok(());
    }
    let head = doc.head().ok_or_else(|| SiteError::missing("head"))?;
    let style = doc.create_element("style")?;
    style.set_id(RIPPLE_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

pub fn install_ripple(
    doc: &Document,
    sel: &Selectors,
    surface: &WebSurface,
    timers: &Timers,
    listeners: &mut ListenerSet,
) -> Result<(), SiteError> {
    let buttons = query_some(doc, &sel.buttons)?;
    inject_ripple_keyframes(doc)?;
    for button in buttons {
        let doc = doc.clone();
        let surface = surface.clone();
        let timers = timers.clone();
        let host = button.clone();
        listeners.on(&button, "click", move |evt: Event| {
            let Some(evt) = evt.dyn_ref::<MouseEvent>() else {
                return;
            };
            let ripple =
                Ripple::at(rect(&host), f64::from(evt.client_x()), f64::from(evt.client_y()));
            let Ok(span) = doc.create_element("span") else {
                return;
            };
            let _ = span.set_attribute("style", &ripple.css_text());
            surface.set_style(&host, "position", "relative");
            surface.set_style(&host, "overflow", "hidden");
            if host.append_child(&span).is_ok() {
                timers.cleanup_after(RIPPLE_MS, move || span.remove());
            }
        })?;
    }
    Ok(())
}

pub fn install_parallax(
    doc: &Document,
    sel: &Selectors,
    surface: &WebSurface,
    listeners: &mut ListenerSet,
) -> Result<(), SiteError> {
    let particles = query_some(doc, &sel.particles)?;
    let surface = surface.clone();
    listeners.on(doc, "mousemove", move |evt: Event| {
        let Some(evt) = evt.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (width, height) = surface.viewport();
        let fx = effects::pointer_fraction(f64::from(evt.client_x()), width);
        let fy = effects::pointer_fraction(f64::from(evt.client_y()), height);
        effects::apply_parallax(&surface, &particles[..], fx, fy);
    })
}

pub fn install_tilt(
    doc: &Document,
    sel: &Selectors,
    surface: &WebSurface,
    listeners: &mut ListenerSet,
) -> Result<(), SiteError> {
    for card in query_some(doc, &sel.cards)? {
        {
            let surface = surface.clone();
            let host = card.clone();
            listeners.on(&card, "mousemove", move |evt: Event| {
                if let Some(evt) = evt.dyn_ref::<MouseEvent>() {
                    effects::apply_tilt(
                        &surface,
                        &host,
                        rect(&host),
                        f64::from(evt.client_x()),
                        f64::from(evt.client_y()),
                    );
                }
            })?;
        }
        let surface = surface.clone();
        let host = card.clone();
        listeners.on(&card, "mouseleave", move |_| effects::reset_tilt(&surface, &host))?;
    }
    Ok(())
}

/// Fade the body in once the page has loaded.
pub fn install_fade_in(
    window: &Window,
    doc: &Document,
    surface: &WebSurface,
    timers: &Timers,
    listeners: &mut ListenerSet,
) -> Result<(), SiteError> {
    let body = doc.body().ok_or_else(|| SiteError::missing("body"))?;
    let fade = {
        let surface = surface.clone();
        let timers = timers.clone();
        move || {
            surface.set_style(&body, "opacity", "0");
            surface.set_style(&body, "transition", "opacity 0.5s ease");
            let surface = surface.clone();
            let body = body.clone();
            timers.after(100, move || surface.set_style(&body, "opacity", "1"));
        }
    };
    if doc.ready_state() == "complete" {
        fade();
        return Ok(());
    }
    listeners.on(window, "load", move |_| fade())
}
