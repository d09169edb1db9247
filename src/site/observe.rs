//! IntersectionObserver wiring for reveals, skill bars and counters.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node,
};

use super::dom::{WebSurface, query_some};
use super::timers::Timers;
use crate::config::{RevealSettings, Selectors};
use crate::error::SiteError;
use crate::motion::visibility::stagger_delay;
use crate::motion::{ValueRamp, VisibilityWatcher};
use crate::surface::Surface;

pub const ANIMATED: &str = "animated";

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An observer that calls back once per element, then unobserves it.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl OneShotObserver {
    pub fn new<F>(targets: Vec<HtmlElement>, threshold: f64, mut on_visible: F) -> Result<Self, SiteError>
    where
        F: FnMut(usize, &HtmlElement) + 'static,
    {
        let watcher = Rc::new(RefCell::new(VisibilityWatcher::new(targets.len(), threshold)));
        let targets = Rc::new(targets);
        let callback = {
            let targets = targets.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let target_node: &Node = target.as_ref();
                    // Elements removed from our list since registration are ignored.
                    let Some(index) = targets.iter().position(|el| el.is_same_node(Some(target_node)))
                    else {
                        continue;
                    };
                    let fired = watcher.borrow_mut().report(
                        index,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    if fired {
                        observer.unobserve(&target);
                        on_visible(index, &targets[index]);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_root_margin("0px");
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for el in targets.iter() {
            observer.observe(el);
        }
        Ok(Self { observer, _callback: callback })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Fade/slide-ins: `animated` is added after a per-element stagger.
pub fn install_reveal(
    doc: &Document,
    sel: &Selectors,
    cfg: RevealSettings,
    surface: WebSurface,
    timers: Timers,
) -> Result<OneShotObserver, SiteError> {
    let elements = query_some(doc, &sel.reveal)?;
    for (i, el) in elements.iter().enumerate() {
        let _ = el.set_attribute("data-delay", &stagger_delay(i, cfg.stagger_ms).to_string());
    }
    OneShotObserver::new(elements, cfg.threshold, move |index, el| {
        let delay = stagger_delay(index, cfg.stagger_ms);
        let el = el.clone();
        let surface = surface.clone();
        timers.after(delay, move || surface.set_class(&el, ANIMATED, true));
    })
}

/// Parse a skill bar's `data-progress` into a CSS width.
pub fn progress_width(raw: &str) -> Result<String, SiteError> {
    let bad = || SiteError::BadAttribute { attribute: "data-progress".into(), value: raw.into() };
    let pct: f64 = raw.trim().parse().map_err(|_| bad())?;
    if !(0.0..=100.0).contains(&pct) {
        return Err(bad());
    }
    Ok(format!("{pct}%"))
}

pub fn parse_count(raw: &str) -> Result<i64, SiteError> {
    raw.trim()
        .parse()
        .map_err(|_| SiteError::BadAttribute { attribute: "data-count".into(), value: raw.into() })
}

pub fn install_skill_bars(
    doc: &Document,
    sel: &Selectors,
    cfg: RevealSettings,
    surface: WebSurface,
    timers: Timers,
) -> Result<OneShotObserver, SiteError> {
    let bars = query_some(doc, &sel.skill_bar)?;
    OneShotObserver::new(bars, cfg.meter_threshold, move |_, bar| {
        let raw = bar.get_attribute("data-progress").unwrap_or_default();
        match progress_width(&raw) {
            Ok(width) => {
                let bar = bar.clone();
                let surface = surface.clone();
                timers.after(cfg.skill_bar_delay_ms, move || surface.set_style(&bar, "width", &width));
            }
            Err(e) => log::warn!("skill bar skipped: {e}"),
        }
    })
}

pub fn install_counters(
    doc: &Document,
    sel: &Selectors,
    threshold: f64,
    duration_ms: u32,
    surface: WebSurface,
    timers: Timers,
) -> Result<OneShotObserver, SiteError> {
    let counters = query_some(doc, &sel.counter)?;
    OneShotObserver::new(counters, threshold, move |index, counter| {
        let raw = counter.get_attribute("data-count").unwrap_or_default();
        match parse_count(&raw) {
            Ok(target) => {
                log::debug!("counter {index} ramping to {target}");
                let ramp = ValueRamp::new(target, timers.now(), duration_ms);
                timers.run_ramp(surface.clone(), counter.clone(), ramp);
            }
            Err(e) => log::warn!("counter skipped: {e}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_width_accepts_percentages() {
        assert_eq!(progress_width("85").unwrap(), "85%");
        assert_eq!(progress_width(" 92.5 ").unwrap(), "92.5%");
    }

    #[test]
    fn progress_width_rejects_garbage() {
        assert!(matches!(progress_width("ninety"), Err(SiteError::BadAttribute { .. })));
        assert!(progress_width("140").is_err());
        assert!(progress_width("").is_err());
    }

    #[test]
    fn count_parses_integers_only() {
        assert_eq!(parse_count("500").unwrap(), 500);
        assert_eq!(parse_count(" 15 ").unwrap(), 15);
        assert!(parse_count("15+").is_err());
    }
}
