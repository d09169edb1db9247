//! Resume Motion core crate.
//!
//! Client-side behaviour for a single-page resume: typing banner, scroll
//! reveals, skill bars and counters, navigation highlighting, back-to-top,
//! smooth anchors, avatar fallback, ripple, parallax and card tilt.
//!
//! Pure behaviour lives in [`motion`] and is host-testable; `site` binds it to
//! the DOM. JS calls `start_site()` once the markup is in place and may keep
//! the returned handle to `stop()` everything later.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod motion;
mod site;
pub mod surface;

pub use config::{PHRASES, SiteConfig};
pub use error::SiteError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. tests sharing the module) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Running page behaviour. Dropping or stopping it removes every listener,
/// observer and pending timer.
#[wasm_bindgen]
pub struct SiteHandle {
    site: site::Site,
}

#[wasm_bindgen]
impl SiteHandle {
    pub fn stop(&mut self) {
        self.site.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.site.is_running()
    }
}

#[wasm_bindgen]
pub fn start_site() -> Result<SiteHandle, JsValue> {
    let site = site::Site::start(SiteConfig::default())?;
    Ok(SiteHandle { site })
}

/// Like `start_site`, with a JSON overlay on the default config.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_site_with_config(json: &str) -> Result<SiteHandle, JsValue> {
    let config = SiteConfig::from_json(json)?;
    let site = site::Site::start(config)?;
    Ok(SiteHandle { site })
}
