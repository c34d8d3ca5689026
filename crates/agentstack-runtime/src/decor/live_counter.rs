use rand::Rng;
use std::ops::RangeInclusive;

pub const LIVE_COUNTER_START: u32 = 2847;
pub const LIVE_COUNTER_BOUNDS: RangeInclusive<u32> = 2400..=3200;
pub const LIVE_COUNTER_STEP: RangeInclusive<i32> = -12..=17;

/// "People browsing now" figure that drifts within fixed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveCounter {
    value: u32,
}

impl Default for LiveCounter {
    fn default() -> Self {
        Self {
            value: LIVE_COUNTER_START,
        }
    }
}

impl LiveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn apply(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.value) + i64::from(delta);
        let (lo, hi) = (
            i64::from(*LIVE_COUNTER_BOUNDS.start()),
            i64::from(*LIVE_COUNTER_BOUNDS.end()),
        );
        self.value = next.clamp(lo, hi) as u32;
        self.value
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let delta = rng.gen_range(LIVE_COUNTER_STEP);
        self.apply(delta)
    }
}
