//! Named periodic tasks with an explicit start/stop lifecycle.
//!
//! The scheduler never runs anything itself: the event loop asks which tasks
//! are due at `now` and dispatches them. Stopped schedulers report nothing.

use rand::Rng;
use std::time::{Duration, Instant};

/// How often a task repeats after its first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Every(Duration),
    /// A fresh random interval in `[min, max]` after every run
    Between(Duration, Duration),
}

impl Cadence {
    fn next_interval(&self) -> Duration {
        match *self {
            Cadence::Every(interval) => interval,
            Cadence::Between(min, max) if max <= min => min,
            Cadence::Between(min, max) => rand::thread_rng().gen_range(min..=max),
        }
    }
}

#[derive(Debug, Clone)]
struct Task<K> {
    key: K,
    first_delay: Duration,
    cadence: Cadence,
    next_due: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    tasks: Vec<Task<K>>,
    running: bool,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            running: false,
        }
    }
}

impl<K: Copy + PartialEq> Scheduler<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task; it first fires `first_delay` after `start`.
    pub fn register(&mut self, key: K, first_delay: Duration, cadence: Cadence) -> &mut Self {
        self.tasks.retain(|t| t.key != key);
        self.tasks.push(Task {
            key,
            first_delay,
            cadence,
            next_due: None,
        });
        self
    }

    pub fn start(&mut self, now: Instant) {
        for task in &mut self.tasks {
            task.next_due = Some(now + task.first_delay);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        for task in &mut self.tasks {
            task.next_due = None;
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tasks whose deadline passed, in registration order. Each fires at
    /// most once per call and is rescheduled from `now`.
    pub fn due(&mut self, now: Instant) -> Vec<K> {
        if !self.running {
            return Vec::new();
        }
        let mut fired = Vec::new();
        for task in &mut self.tasks {
            if let Some(deadline) = task.next_due
                && now >= deadline
            {
                task.next_due = Some(now + task.cadence.next_interval());
                fired.push(task.key);
            }
        }
        fired
    }

    /// Earliest pending deadline, used to bound the input poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().filter_map(|t| t.next_due).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Job {
        Fast,
        Slow,
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn scheduler() -> Scheduler<Job> {
        let mut s = Scheduler::new();
        s.register(Job::Fast, ms(1000), Cadence::Every(ms(1000)))
            .register(Job::Slow, ms(3000), Cadence::Every(ms(5000)));
        s
    }

    #[test]
    fn nothing_fires_before_start() {
        let mut s = scheduler();
        assert!(s.due(Instant::now() + ms(60_000)).is_empty());
    }

    #[test]
    fn fires_on_cadence_after_start() {
        let start = Instant::now();
        let mut s = scheduler();
        s.start(start);

        assert!(s.due(start + ms(999)).is_empty());
        assert_eq!(s.due(start + ms(1000)), vec![Job::Fast]);
        assert_eq!(s.due(start + ms(3000)), vec![Job::Fast, Job::Slow]);
        assert!(s.due(start + ms(3500)).is_empty());
        assert_eq!(s.due(start + ms(4000)), vec![Job::Fast]);
    }

    #[test]
    fn stop_silences_every_task() {
        let start = Instant::now();
        let mut s = scheduler();
        s.start(start);
        s.stop();
        assert!(!s.is_running());
        assert!(s.due(start + ms(10_000)).is_empty());
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn random_cadence_stays_in_bounds() {
        let start = Instant::now();
        let mut s = Scheduler::new();
        s.register(Job::Fast, ms(0), Cadence::Between(ms(7000), ms(10_000)));
        s.start(start);

        assert_eq!(s.due(start), vec![Job::Fast]);
        let next = s.next_deadline().unwrap() - start;
        assert!(next >= ms(7000) && next <= ms(10_000));
    }
}
