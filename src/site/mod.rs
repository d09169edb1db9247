//! Browser side: finds the page's elements, wires events, observers and timers
//! to the `motion` controllers, and tears all of it down on `stop`.
//!
//! A component whose markup is missing is logged and skipped; only a missing
//! window or document aborts `Site::start`.

pub mod avatar;
pub mod dom;
pub mod handlers;
pub mod listeners;
pub mod observe;
pub mod timers;

use crate::config::SiteConfig;
use crate::error::SiteError;
use dom::WebSurface;
use listeners::ListenerSet;
use observe::OneShotObserver;
use timers::{Timers, TypingLoop};

const BANNER: &str = r"
╔══════════════════════════════════════════╗
║      RAMAJEE PRASAD                      ║
║      AI & Data Analytics Trainer         ║
║      Professional Resume                 ║
╚══════════════════════════════════════════╝";

pub struct Site {
    listeners: ListenerSet,
    observers: Vec<OneShotObserver>,
    typing: Option<TypingLoop>,
    timers: Timers,
    running: bool,
}

fn keep<T>(component: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{component} disabled: {e}");
            None
        }
    }
}

impl Site {
    pub fn start(config: SiteConfig) -> Result<Self, SiteError> {
        config.validate()?;
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let doc = window.document().ok_or(SiteError::NoDocument)?;
        let surface = WebSurface::new(window.clone());
        let timers = Timers::new(window.clone());
        let mut listeners = ListenerSet::default();
        let sel = &config.selectors;

        log::info!("{BANNER}");

        let nav = keep(
            "navigation",
            handlers::install_navigation(&window, &doc, sel, config.scroll, &surface, &mut listeners),
        );
        let typing = keep("typing banner", handlers::start_typing(&window, &doc, &config, &surface));

        let observers: Vec<OneShotObserver> = [
            keep(
                "scroll reveal",
                observe::install_reveal(&doc, sel, config.reveal, surface.clone(), timers.clone()),
            ),
            keep(
                "skill bars",
                observe::install_skill_bars(&doc, sel, config.reveal, surface.clone(), timers.clone()),
            ),
            keep(
                "counters",
                observe::install_counters(
                    &doc,
                    sel,
                    config.reveal.meter_threshold,
                    config.counter_duration_ms,
                    surface.clone(),
                    timers.clone(),
                ),
            ),
        ]
        .into_iter()
        .flatten()
        .collect();

        keep(
            "back to top",
            handlers::install_back_to_top(
                &window,
                &doc,
                sel,
                config.scroll.back_to_top_px,
                &surface,
                &mut listeners,
            ),
        );
        keep("anchor scroll", handlers::install_anchor_scroll(&doc, sel, &surface, &mut listeners));
        keep(
            "avatar",
            avatar::install_avatar(&doc, &sel.avatar_id, config.avatar.clone(), &mut listeners),
        );
        keep("keyboard", handlers::install_keyboard(&doc, nav, &surface, &mut listeners));
        keep("ripple", handlers::install_ripple(&doc, sel, &surface, &timers, &mut listeners));
        keep("parallax", handlers::install_parallax(&doc, sel, &surface, &mut listeners));
        keep("card tilt", handlers::install_tilt(&doc, sel, &surface, &mut listeners));
        keep(
            "fade in",
            handlers::install_fade_in(&window, &doc, &surface, &timers, &mut listeners),
        );

        log::info!(
            "site started: {} listeners, {} observers, typing={}",
            listeners.count(),
            observers.len(),
            typing.is_some()
        );
        Ok(Self { listeners, observers, typing, timers, running: true })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.timers.cancel_all();
        if let Some(typing) = self.typing.take() {
            typing.stop();
        }
        for observer in self.observers.drain(..) {
            observer.disconnect();
        }
        self.listeners.clear();
        log::info!("site stopped");
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        self.stop();
    }
}
