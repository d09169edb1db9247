//! One-shot visibility tracking shared by reveals, skill bars and counters.
//!
//! Each watched entity is `Pending` until the first report at or above the
//! threshold, then `Triggered` for good. The browser side unobserves an element
//! as soon as `report` returns true, but the state here holds the guarantee on
//! its own: a second crossing never fires.

/// Browsers round ratios on fractional-pixel layouts (0.4999 for 0.5).
const RATIO_SLACK: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Pending,
    Triggered,
}

#[derive(Debug)]
pub struct VisibilityWatcher {
    threshold: f64,
    states: Vec<WatchState>,
}

impl VisibilityWatcher {
    /// Watch `count` entities addressed by index `0..count`.
    pub fn new(count: usize, threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), states: vec![WatchState::Pending; count] }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<WatchState> {
        self.states.get(index).copied()
    }

    /// Feed one visibility sample. Returns true exactly once per entity: on the
    /// first sample whose ratio reaches the threshold (within rounding) while
    /// intersecting.
    pub fn report(&mut self, index: usize, intersecting: bool, ratio: f64) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        if *state == WatchState::Triggered || !intersecting || ratio + RATIO_SLACK < self.threshold {
            return false;
        }
        *state = WatchState::Triggered;
        true
    }

    pub fn pending(&self) -> usize {
        self.states.iter().filter(|s| **s == WatchState::Pending).count()
    }
}

/// Reveal start offset for the element at `index` in document order.
pub fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    (index as u32).saturating_mul(stagger_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_entity() {
        let mut w = VisibilityWatcher::new(2, 0.5);
        assert!(w.report(0, true, 0.6));
        assert!(!w.report(0, true, 0.9));
        assert!(!w.report(0, false, 0.0));
        assert!(!w.report(0, true, 1.0));
        assert_eq!(w.state(0), Some(WatchState::Triggered));
        assert_eq!(w.state(1), Some(WatchState::Pending));
        assert_eq!(w.pending(), 1);
    }

    #[test]
    fn below_threshold_keeps_pending() {
        let mut w = VisibilityWatcher::new(1, 0.5);
        assert!(!w.report(0, true, 0.2));
        assert_eq!(w.state(0), Some(WatchState::Pending));
        assert!(w.report(0, true, 0.5));
    }

    #[test]
    fn rounded_ratio_at_threshold_fires() {
        let mut w = VisibilityWatcher::new(2, 0.5);
        assert!(w.report(0, true, 0.4999));
        assert_eq!(w.pending(), 1);
        assert!(!w.report(1, true, 0.49));
    }

    #[test]
    fn already_visible_at_registration_fires() {
        // The first sample after observe() arrives with the current ratio.
        let mut w = VisibilityWatcher::new(1, 0.1);
        assert!(w.report(0, true, 1.0));
    }

    #[test]
    fn not_intersecting_never_fires() {
        let mut w = VisibilityWatcher::new(1, 0.0);
        assert!(!w.report(0, false, 0.0));
        assert!(w.report(0, true, 0.0));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut w = VisibilityWatcher::new(1, 0.1);
        assert!(!w.report(3, true, 1.0));
        assert_eq!(w.state(3), None);
    }

    #[test]
    fn stagger_is_index_times_step() {
        assert_eq!(stagger_delay(0, 100), 0);
        assert_eq!(stagger_delay(4, 100), 400);
    }
}
