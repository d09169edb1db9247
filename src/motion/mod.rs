//! Browser-independent behaviour of the page.
//!
//! Everything under here compiles and tests on the host: controllers take
//! plain numbers (scroll offsets, pointer positions, frame timestamps) and
//! write through a [`Surface`](crate::surface::Surface).

pub mod effects;
pub mod nav;
pub mod ramp;
pub mod scroll;
pub mod typing;
pub mod visibility;

pub use nav::{NavController, NavLink, SectionBox};
pub use ramp::ValueRamp;
pub use scroll::BackToTop;
pub use typing::{TextCycler, Typewriter};
pub use visibility::{VisibilityWatcher, WatchState};
