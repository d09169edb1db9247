//! Timeout and animation-frame plumbing.
//!
//! One-shot delays go through `Timers::after`, which drops the callback on the
//! floor once the site is stopped; `Timers::cleanup_after` always runs. The
//! typing banner and the counter ramps are self-rescheduling closures in the
//! `Rc<RefCell<Option<Closure>>>` shape.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window};

use super::dom::{WebSurface, performance_now};
use crate::motion::{Typewriter, ValueRamp};
use crate::surface::Surface;

type TickCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn timeout_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

#[derive(Clone)]
pub struct Timers {
    window: Window,
    alive: Rc<Cell<bool>>,
}

impl Timers {
    pub fn new(window: Window) -> Self {
        Self { window, alive: Rc::new(Cell::new(true)) }
    }

    pub fn now(&self) -> f64 {
        performance_now(&self.window)
    }

    /// Run `f` once after `ms`, unless the site has been stopped by then.
    pub fn after<F>(&self, ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        let alive = self.alive.clone();
        self.set_timeout(ms, move || {
            if alive.get() {
                f();
            }
        });
    }

    /// Run `f` once after `ms` even if the site stops first. For undoing DOM
    /// changes that must not outlive the site.
    pub fn cleanup_after<F>(&self, ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.set_timeout(ms, f);
    }

    fn set_timeout<F>(&self, ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        let cb = Closure::once_into_js(f);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), timeout_ms(ms))
        {
            log::warn!("setTimeout failed: {e:?}");
        }
    }

    /// Write a ramp's frames into `node` until it completes.
    pub fn run_ramp(&self, surface: WebSurface, node: HtmlElement, ramp: ValueRamp) {
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let alive = self.alive.clone();
        let window = self.window.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            if !alive.get() {
                let _ = f.borrow_mut().take();
                return;
            }
            let frame = ramp.sample(ts);
            surface.set_text(&node, &frame.value.to_string());
            if frame.done {
                let _ = f.borrow_mut().take();
                return;
            }
            if let Some(cb) = f.borrow().as_ref() {
                let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(f64)>));
        if let Some(cb) = g.borrow().as_ref() {
            let _ = self.window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    pub fn cancel_all(&self) {
        self.alive.set(false);
    }
}

/// Handle to the running typing banner.
pub struct TypingLoop {
    window: Window,
    callback: TickCallback,
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl TypingLoop {
    pub fn start(window: Window, surface: WebSurface, mut typewriter: Typewriter<WebSurface>) -> Self {
        let first_delay = typewriter.start_delay();
        let f: TickCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let pending = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));
        {
            let pending = pending.clone();
            let stopped = stopped.clone();
            let window = window.clone();
            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                pending.set(None);
                if stopped.get() {
                    return;
                }
                let delay = typewriter.tick(&surface);
                if let Some(cb) = f.borrow().as_ref() {
                    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        timeout_ms(delay),
                    ) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => log::warn!("typing loop halted: {e:?}"),
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        let this = Self { window, callback: g, pending, stopped };
        this.schedule(first_delay);
        this
    }

    fn schedule(&self, ms: u32) {
        if let Some(cb) = self.callback.borrow().as_ref() {
            match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                timeout_ms(ms),
            ) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::warn!("typing loop not started: {e:?}"),
            }
        }
    }

    /// Cancel the pending tick and release the closure. Safe to call twice.
    pub fn stop(&self) {
        self.stopped.set(true);
        if let Some(id) = self.pending.take() {
            self.window.clear_timeout_with_handle(id);
        }
        let _ = self.callback.borrow_mut().take();
    }
}
