//! Decorative subsystems: testimonial carousel, countdown, live counter,
//! activity feed, confetti and the hero counter animation.
//!
//! They read neither the view state nor the catalog, and everything stops
//! when decorations are disabled.

pub mod activity;
pub mod carousel;
pub mod confetti;
pub mod countdown;
pub mod counter_animation;
pub mod live_counter;

pub use activity::{ActivityFeed, ActivityItem};
pub use carousel::{Carousel, TESTIMONIALS, Testimonial};
pub use confetti::{Confetti, ConfettiBurst, Particle};
pub use countdown::Countdown;
pub use counter_animation::{CounterAnimation, ease_out_quart};
pub use live_counter::LiveCounter;

use crate::config::DecorationConfig;
use crate::reveal::RevealGuard;
use crate::scheduler::{Cadence, Scheduler};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorTask {
    Carousel,
    Countdown,
    LiveCounter,
    Activity,
}

/// Reveal key of the hero stats row.
pub const HERO_STATS: &str = "hero-stats";

pub struct Decorations {
    config: DecorationConfig,
    scheduler: Scheduler<DecorTask>,
    carousel: Carousel,
    countdown: Countdown,
    countdown_text: String,
    live_counter: LiveCounter,
    activity: ActivityFeed,
    confetti: Confetti,
    counters: Vec<CounterAnimation>,
    reveals: RevealGuard<&'static str>,
}

impl Decorations {
    pub fn new(config: DecorationConfig, per_page: usize, hero_targets: &[u64]) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler
            .register(
                DecorTask::Carousel,
                config.carousel_interval(),
                Cadence::Every(config.carousel_interval()),
            )
            .register(
                DecorTask::Countdown,
                Duration::ZERO,
                Cadence::Every(config.countdown_tick()),
            )
            .register(
                DecorTask::LiveCounter,
                config.live_counter_interval(),
                Cadence::Every(config.live_counter_interval()),
            );
        let (min, max) = config.activity_interval();
        scheduler.register(
            DecorTask::Activity,
            config.activity_first_delay(),
            Cadence::Between(min, max),
        );

        let counters = hero_targets
            .iter()
            .map(|&t| CounterAnimation::new(t, config.counter_animation()))
            .collect();

        let mut countdown = Countdown::starting_now();
        let countdown_text = countdown.tick_now();

        Self {
            activity: ActivityFeed::new(config.activity_lifetime()),
            confetti: Confetti::new(config.confetti_lifetime()),
            carousel: Carousel::for_testimonials(per_page),
            countdown,
            countdown_text,
            live_counter: LiveCounter::new(),
            counters,
            reveals: RevealGuard::new(),
            scheduler,
            config,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Start every periodic task; a no-op when decorations are disabled.
    pub fn start(&mut self, now: Instant) {
        if self.config.enabled {
            self.scheduler.start(now);
        }
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Run every task due at `now` and report which ones ran.
    pub fn tick(&mut self, now: Instant) -> Vec<DecorTask> {
        let due = self.scheduler.due(now);
        let mut rng = rand::thread_rng();
        for task in &due {
            match task {
                DecorTask::Carousel => self.carousel.advance(),
                DecorTask::Countdown => self.countdown_text = self.countdown.tick_now(),
                DecorTask::LiveCounter => {
                    self.live_counter.tick(&mut rng);
                }
                DecorTask::Activity => {
                    self.activity.push_random(&mut rng, now);
                }
            }
        }
        due
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Confetti burst for a successful form; nothing when disabled.
    pub fn celebrate(&mut self, now: Instant) {
        if self.config.enabled {
            self.confetti.launch(&mut rand::thread_rng(), now);
        }
    }

    /// First sighting of the hero stats starts their count-up, once.
    pub fn reveal_hero_stats(&mut self, now: Instant) {
        if self.reveals.trigger(HERO_STATS) {
            for counter in &mut self.counters {
                counter.start(now);
            }
        }
    }

    /// Hero stat values at `now`; final values when decorations are off.
    pub fn hero_values(&self, now: Instant) -> Vec<u64> {
        self.counters
            .iter()
            .map(|c| {
                if self.config.enabled {
                    c.value_at(now)
                } else {
                    c.target()
                }
            })
            .collect()
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn countdown_text(&self) -> &str {
        &self.countdown_text
    }

    pub fn live_count(&self) -> u32 {
        self.live_counter.value()
    }

    pub fn activity(&mut self, now: Instant) -> Vec<ActivityItem> {
        self.activity.visible(now).cloned().collect()
    }

    pub fn confetti(&mut self, now: Instant) -> &[ConfettiBurst] {
        self.confetti.active(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn disabled_decorations_never_tick() {
        let now = Instant::now();
        let mut decor = Decorations::new(DecorationConfig::disabled(), 3, &[42]);
        decor.start(now);
        assert!(!decor.is_running());
        assert!(decor.tick(now + ms(60_000)).is_empty());

        decor.celebrate(now);
        assert!(decor.confetti(now).is_empty());
        decor.reveal_hero_stats(now);
        assert_eq!(decor.hero_values(now), vec![42]);
    }

    #[test]
    fn tasks_follow_their_intervals() {
        let now = Instant::now();
        let mut decor = Decorations::new(DecorationConfig::default(), 3, &[]);
        decor.start(now);

        assert_eq!(decor.tick(now), vec![DecorTask::Countdown]);
        assert_eq!(decor.tick(now + ms(3000)), vec![DecorTask::Countdown, DecorTask::Activity]);
        assert_eq!(decor.activity(now + ms(3000)).len(), 1);

        let ran = decor.tick(now + ms(5000));
        assert!(ran.contains(&DecorTask::Carousel));
        assert_eq!(decor.carousel().page(), 1);

        decor.stop();
        assert!(decor.tick(now + ms(60_000)).is_empty());
    }

    #[test]
    fn hero_stats_start_once() {
        let now = Instant::now();
        let mut decor = Decorations::new(DecorationConfig::default(), 1, &[100, 8]);
        assert_eq!(decor.hero_values(now), vec![0, 0]);

        decor.reveal_hero_stats(now);
        decor.reveal_hero_stats(now + ms(1000));
        assert_eq!(decor.hero_values(now + ms(1800)), vec![100, 8]);
    }
}
