use std::time::{Duration, Instant};

/// Ease-out quartic: fast start, gentle landing.
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Counts a stat up from zero to its target, once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
    started_at: Option<Instant>,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started_at: None,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Start the animation; later calls are ignored.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Displayed value at `now`: zero before start, the target once finished.
    pub fn value_at(&self, now: Instant) -> u64 {
        let Some(start) = self.started_at else {
            return 0;
        };
        if self.duration.is_zero() {
            return self.target;
        }
        let p = now.saturating_duration_since(start).as_secs_f64() / self.duration.as_secs_f64();
        (self.target as f64 * ease_out_quart(p)).round() as u64
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) >= self.duration)
    }
}
