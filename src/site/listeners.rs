use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::error::SiteError;

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Owns every installed event closure so the page can be torn down.
#[derive(Default)]
pub struct ListenerSet {
    installed: Vec<Listener>,
}

impl ListenerSet {
    pub fn on<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.installed.push(Listener { target: target.clone(), event, closure });
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.installed.len()
    }

    pub fn clear(&mut self) {
        for l in self.installed.drain(..) {
            let _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.clear();
    }
}
