//! Counter ramp: 0 → target with a quartic ease-out over a fixed duration.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRamp {
    start_ms: f64,
    target: i64,
    duration_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub value: i64,
    pub done: bool,
}

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

impl ValueRamp {
    pub fn new(target: i64, start_ms: f64, duration_ms: u32) -> Self {
        Self { start_ms, target, duration_ms: f64::from(duration_ms.max(1)) }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Progress fraction, clamped to 0..=1. Frame timestamps may predate the
    /// start sample by a fraction of a frame.
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> Frame {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return Frame { value: self.target, done: true };
        }
        let value = (self.target as f64 * ease_out_quart(p)).floor() as i64;
        Frame { value, done: false }
    }
}

/// `value` after `elapsed_ms` of a ramp toward `target`.
pub fn ramp(target: i64, elapsed_ms: f64, duration_ms: u32) -> i64 {
    ValueRamp::new(target, 0.0, duration_ms).sample(elapsed_ms).value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ramp(100, 0.0, 2000), 0);
        assert_eq!(ramp(100, 2000.0, 2000), 100);
        assert_eq!(ramp(100, 9000.0, 2000), 100);
    }

    #[test]
    fn completion_forces_target() {
        let r = ValueRamp::new(7, 1000.0, 2000);
        assert_eq!(r.sample(3000.0), Frame { value: 7, done: true });
        assert!(!r.sample(2999.0).done);
    }

    #[test]
    fn monotonic_for_positive_target() {
        let mut last = 0;
        for ms in (0..=2000).step_by(16) {
            let v = ramp(5000, ms as f64, 2000);
            assert!(v >= last, "{v} < {last} at {ms}ms");
            last = v;
        }
        assert_eq!(last, 5000);
    }

    #[test]
    fn halfway_is_mostly_done() {
        // 1 - 0.5^4 = 0.9375
        assert_eq!(ramp(100, 1000.0, 2000), 93);
    }

    #[test]
    fn early_timestamp_clamps_to_zero() {
        let r = ValueRamp::new(50, 1000.0, 2000);
        assert_eq!(r.sample(995.0).value, 0);
    }
}
