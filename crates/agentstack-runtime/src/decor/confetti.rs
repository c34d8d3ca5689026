use rand::Rng;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

pub const CONFETTI_PARTICLES: usize = 80;
pub const CONFETTI_COLORS: [&str; 7] = [
    "#a78bfa", "#06b6d4", "#34d399", "#fbbf24", "#f472b6", "#818cf8", "#f97316",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the width in [0, 100)
    pub x: f32,
    /// Seconds before the particle starts falling, < 0.3
    pub delay: f32,
    /// Edge length in pixels, 6 to 12
    pub size: f32,
    /// Seconds to fall the full height, 1.5 to 2.5
    pub fall: f32,
    pub round: bool,
    pub color: &'static str,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..0.3),
            size: 6.0 + rng.gen_range(0.0..6.0),
            fall: 1.5 + rng.gen_range(0.0..1.0),
            round: rng.gen_bool(0.5),
            color: CONFETTI_COLORS.choose(rng).copied().unwrap_or(CONFETTI_COLORS[0]),
        }
    }

    /// Vertical progress in [0, 1] after `elapsed`, or `None` before the
    /// particle starts or after it lands.
    pub fn progress(&self, elapsed: Duration) -> Option<f32> {
        let t = elapsed.as_secs_f32() - self.delay;
        if t < 0.0 || t > self.fall {
            return None;
        }
        Some(t / self.fall)
    }
}

#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    pub particles: Vec<Particle>,
    pub started_at: Instant,
    pub expires_at: Instant,
}

/// Celebration bursts, each removed after a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Confetti {
    lifetime: Duration,
    bursts: Vec<ConfettiBurst>,
}

impl Confetti {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            bursts: Vec::new(),
        }
    }

    pub fn launch<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) {
        let particles = (0..CONFETTI_PARTICLES)
            .map(|_| Particle::random(&mut *rng))
            .collect();
        self.bursts.push(ConfettiBurst {
            particles,
            started_at: now,
            expires_at: now + self.lifetime,
        });
    }

    pub fn active(&mut self, now: Instant) -> &[ConfettiBurst] {
        self.bursts.retain(|b| now < b.expires_at);
        &self.bursts
    }

    pub fn is_active(&self) -> bool {
        !self.bursts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_has_eighty_particles_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Instant::now();
        let mut confetti = Confetti::new(Duration::from_millis(3000));
        confetti.launch(&mut rng, now);

        let bursts = confetti.active(now);
        assert_eq!(bursts.len(), 1);
        let particles = &bursts[0].particles;
        assert_eq!(particles.len(), CONFETTI_PARTICLES);
        for p in particles {
            assert!((0.0..100.0).contains(&p.x));
            assert!(p.delay < 0.3);
            assert!((6.0..=12.0).contains(&p.size));
            assert!((1.5..=2.5).contains(&p.fall));
            assert!(CONFETTI_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn burst_is_removed_after_lifetime() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = Instant::now();
        let mut confetti = Confetti::new(Duration::from_millis(3000));
        confetti.launch(&mut rng, now);

        assert_eq!(confetti.active(now + Duration::from_millis(2999)).len(), 1);
        assert!(confetti.active(now + Duration::from_millis(3000)).is_empty());
        assert!(!confetti.is_active());
    }

    #[test]
    fn particle_progress_respects_delay() {
        let p = Particle {
            x: 10.0,
            delay: 0.25,
            size: 8.0,
            fall: 2.0,
            round: true,
            color: CONFETTI_COLORS[0],
        };
        assert_eq!(p.progress(Duration::from_millis(100)), None);
        assert_eq!(p.progress(Duration::from_millis(1250)), Some(0.5));
        assert_eq!(p.progress(Duration::from_millis(2500)), None);
    }
}
