//! Per-event cosmetic effects: ripple geometry, particle parallax, card tilt
//! and avatar initials. All of it is plain arithmetic; the browser side reads
//! geometry and writes the resulting styles.

use crate::surface::Surface;

pub const RIPPLE_MS: u32 = 600;
pub const RIPPLE_KEYFRAMES: &str =
    "@keyframes rippleEffect { to { transform: scale(4); opacity: 0; } }";
pub const TILT_NEUTRAL: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

const PARALLAX_STEP: f64 = 20.0;
const TILT_DIVISOR: f64 = 10.0;

/// Client-space bounding box of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// Circle as large as the button's longer side, centred on the click.
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self { size, x: client_x - rect.left - size / 2.0, y: client_y - rect.top - size / 2.0 }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {s}px; height: {s}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: rippleEffect {d}s ease-out; pointer-events: none;",
            s = self.size,
            x = self.x,
            y = self.y,
            d = f64::from(RIPPLE_MS) / 1000.0,
        )
    }
}

/// Offset for particle `index` given the pointer as a fraction of the viewport.
pub fn parallax_offset(index: usize, frac_x: f64, frac_y: f64) -> (f64, f64) {
    let speed = (index as f64 + 1.0) * PARALLAX_STEP;
    ((frac_x - 0.5) * speed, (frac_y - 0.5) * speed)
}

/// Pointer position as a viewport fraction; a zero-sized viewport maps to the centre.
pub fn pointer_fraction(client: f64, extent: f64) -> f64 {
    if extent > 0.0 { client / extent } else { 0.5 }
}

pub fn apply_parallax<S: Surface>(surface: &S, particles: &[S::Node], frac_x: f64, frac_y: f64) {
    for (i, node) in particles.iter().enumerate() {
        let (x, y) = parallax_offset(i, frac_x, frac_y);
        surface.set_style(node, "transform", &format!("translate({x}px, {y}px)"));
    }
}

/// Degrees of rotation (about x, about y) for a pointer at card-local `(x, y)`.
pub fn tilt_angles(rect: Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    ((y - center_y) / TILT_DIVISOR, (center_x - x) / TILT_DIVISOR)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateY(-10px)")
}

pub fn apply_tilt<S: Surface>(surface: &S, card: &S::Node, rect: Rect, client_x: f64, client_y: f64) {
    let (rx, ry) = tilt_angles(rect, client_x, client_y);
    surface.set_style(card, "transform", &tilt_transform(rx, ry));
}

pub fn reset_tilt<S: Surface>(surface: &S, card: &S::Node) {
    surface.set_style(card, "transform", TILT_NEUTRAL);
}

/// Up to two upper-case initials: first letter of the first and last words.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());
    first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
}

/// Sources that can never load and go straight to the drawn fallback.
pub fn is_placeholder_src(src: &str) -> bool {
    src.is_empty() || src.ends_with('#')
}

/// Whether an avatar should switch to the drawn tile right away. A load that
/// already finished with no pixels failed before anyone could listen for it.
pub fn needs_fallback(src: &str, complete: bool, natural_width: u32) -> bool {
    is_placeholder_src(src) || (complete && natural_width == 0)
}
