//! Navigation bar: mobile menu state, `scrolled` styling and active-link
//! highlighting by scroll position.

use crate::config::ScrollThresholds;
use crate::surface::Surface;

pub const ACTIVE: &str = "active";
pub const SCROLLED: &str = "scrolled";

/// Layout of one id-bearing section, as read from the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Id of the section containing `scroll_y`.
///
/// Each section's range is `[offset_top - lead, offset_top - lead + height)`.
/// Sections are scanned in document order and the last match wins, so when
/// ranges overlap the later section takes the highlight.
pub fn current_section(sections: &[SectionBox], scroll_y: f64, lead: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let top = section.offset_top - lead;
        if scroll_y >= top && scroll_y < top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Fragment a nav link must carry to match `section_id`.
pub fn fragment_for(section_id: &str) -> String {
    format!("#{section_id}")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub struct NavLink<N> {
    pub node: N,
    pub href: String,
}

pub struct NavController<S: Surface> {
    navbar: S::Node,
    toggle: S::Node,
    menu_panel: S::Node,
    links: Vec<NavLink<S::Node>>,
    thresholds: ScrollThresholds,
    menu: MenuState,
    active: Option<String>,
}

impl<S: Surface> NavController<S> {
    pub fn new(
        navbar: S::Node,
        toggle: S::Node,
        menu_panel: S::Node,
        links: Vec<NavLink<S::Node>>,
        thresholds: ScrollThresholds,
    ) -> Self {
        Self { navbar, toggle, menu_panel, links, thresholds, menu: MenuState::default(), active: None }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn toggle_menu(&mut self, surface: &S) {
        self.set_menu(surface, !self.menu.open);
    }

    /// Link clicks and Escape both land here.
    pub fn close_menu(&mut self, surface: &S) {
        self.set_menu(surface, false);
    }

    fn set_menu(&mut self, surface: &S, open: bool) {
        self.menu.open = open;
        surface.set_class(&self.toggle, ACTIVE, open);
        surface.set_class(&self.menu_panel, ACTIVE, open);
    }

    pub fn on_scroll(&mut self, surface: &S, scroll_y: f64, sections: &[SectionBox]) {
        surface.set_class(&self.navbar, SCROLLED, scroll_y > self.thresholds.navbar_scrolled_px);

        self.active =
            current_section(sections, scroll_y, self.thresholds.section_lead_px).map(str::to_string);
        let wanted = self.active.as_deref().map(fragment_for);
        for link in &self.links {
            let on = wanted.as_deref() == Some(link.href.as_str());
            surface.set_class(&link.node, ACTIVE, on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    const NAVBAR: usize = 1;
    const TOGGLE: usize = 2;
    const PANEL: usize = 3;

    fn three_sections() -> Vec<SectionBox> {
        // Offsets already include the 100px lead so the ranges are
        // [0,300), [300,800), [800,1500).
        vec![
            SectionBox { id: "home".into(), offset_top: 100.0, height: 300.0 },
            SectionBox { id: "about".into(), offset_top: 400.0, height: 500.0 },
            SectionBox { id: "skills".into(), offset_top: 900.0, height: 700.0 },
        ]
    }

    fn controller() -> NavController<RecordingSurface> {
        let links = ["#home", "#about", "#skills"]
            .iter()
            .enumerate()
            .map(|(i, h)| NavLink { node: 10 + i, href: h.to_string() })
            .collect();
        NavController::new(NAVBAR, TOGGLE, PANEL, links, ScrollThresholds::default())
    }

    #[test]
    fn middle_section_is_active_at_350() {
        let surface = RecordingSurface::default();
        let mut nav = controller();
        nav.on_scroll(&surface, 350.0, &three_sections());
        assert_eq!(nav.active_section(), Some("about"));
        assert!(!surface.has_class(10, ACTIVE));
        assert!(surface.has_class(11, ACTIVE));
        assert!(!surface.has_class(12, ACTIVE));
    }

    #[test]
    fn highlight_moves_with_scroll() {
        let surface = RecordingSurface::default();
        let mut nav = controller();
        nav.on_scroll(&surface, 350.0, &three_sections());
        nav.on_scroll(&surface, 900.0, &three_sections());
        assert!(!surface.has_class(11, ACTIVE));
        assert!(surface.has_class(12, ACTIVE));
    }

    #[test]
    fn no_section_clears_all_links() {
        let surface = RecordingSurface::default();
        let mut nav = controller();
        nav.on_scroll(&surface, 350.0, &three_sections());
        nav.on_scroll(&surface, 5000.0, &three_sections());
        assert_eq!(nav.active_section(), None);
        assert!((10..13).all(|id| !surface.has_class(id, ACTIVE)));
    }

    #[test]
    fn overlapping_sections_last_match_wins() {
        let sections = vec![
            SectionBox { id: "a".into(), offset_top: 0.0, height: 1000.0 },
            SectionBox { id: "b".into(), offset_top: 200.0, height: 100.0 },
        ];
        assert_eq!(current_section(&sections, 150.0, 100.0), Some("b"));
        assert_eq!(current_section(&sections, 250.0, 100.0), Some("a"));
    }

    #[test]
    fn range_end_is_exclusive() {
        let sections = three_sections();
        assert_eq!(current_section(&sections, 300.0, 100.0), Some("about"));
        assert_eq!(current_section(&sections, 299.9, 100.0), Some("home"));
    }

    #[test]
    fn navbar_scrolled_past_100() {
        let surface = RecordingSurface::default();
        let mut nav = controller();
        nav.on_scroll(&surface, 100.0, &[]);
        assert!(!surface.has_class(NAVBAR, SCROLLED));
        nav.on_scroll(&surface, 101.0, &[]);
        assert!(surface.has_class(NAVBAR, SCROLLED));
        nav.on_scroll(&surface, 0.0, &[]);
        assert!(!surface.has_class(NAVBAR, SCROLLED));
    }

    #[test]
    fn toggling_twice_restores_state() {
        let surface = RecordingSurface::default();
        let mut nav = controller();
        let before = (nav.menu(), surface.node(TOGGLE).classes, surface.node(PANEL).classes);
        nav.toggle_menu(&surface);
        assert!(nav.menu().open);
        assert!(surface.has_class(TOGGLE, ACTIVE) && surface.has_class(PANEL, ACTIVE));
        nav.toggle_menu(&surface);
        let after = (nav.menu(), surface.node(TOGGLE).classes, surface.node(PANEL).classes);
        assert_eq!(before, after);
    }

    #[test]
    fn close_forces_closed() {
        let surface = RecordingSurface::default();
        let mut nav = controller();
        nav.close_menu(&surface);
        assert!(!nav.menu().open);
        nav.toggle_menu(&surface);
        nav.close_menu(&surface);
        assert!(!nav.menu().open);
        assert!(!surface.has_class(PANEL, ACTIVE));
    }
}
