use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const MAX_VISIBLE_ACTIVITY: usize = 2;

struct ActivityTemplate {
    action: &'static str,
    items: &'static [&'static str],
}

const TEMPLATES: &[ActivityTemplate] = &[
    ActivityTemplate {
        action: "just viewed",
        items: &[
            "Devin",
            "Cursor Agent",
            "AutoGPT",
            "GitHub Copilot Workspace",
            "Tabnine",
            "Replit Agent",
        ],
    },
    ActivityTemplate {
        action: "signed up to list",
        items: &["their coding agent", "a new research assistant", "an AI writer"],
    },
    ActivityTemplate {
        action: "compared",
        items: &["Devin vs Cursor Agent", "AutoGPT vs BabyAGI", "Copilot vs Tabnine"],
    },
    ActivityTemplate {
        action: "submitted a review for",
        items: &[
            "Devin",
            "GitHub Copilot Workspace",
            "Jasper AI",
            "Salesforce Agentforce",
        ],
    },
    ActivityTemplate {
        action: "purchased Featured listing for",
        items: &["CodeWhisperer", "Phind", "Sweep AI"],
    },
];

const NAMES: &[&str] = &[
    "Sarah", "Marcus", "Priya", "James", "Lisa", "David", "Emma", "Alex", "Jordan", "Taylor",
    "Morgan", "Casey", "Riley", "Sam", "Chris",
];

const LOCATIONS: &[&str] = &[
    "San Francisco",
    "New York",
    "London",
    "Berlin",
    "Tokyo",
    "Toronto",
    "Sydney",
    "Singapore",
    "Paris",
    "Austin",
];

const COLORS: &[&str] = &[
    "#a78bfa", "#06b6d4", "#f472b6", "#34d399", "#fbbf24", "#818cf8", "#f97316", "#ec4899",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub name: &'static str,
    pub location: &'static str,
    pub action: &'static str,
    pub item: &'static str,
    pub color: &'static str,
    pub expires_at: Instant,
}

impl ActivityItem {
    pub fn text(&self) -> String {
        format!("{} from {} {} {}", self.name, self.location, self.action, self.item)
    }
}

/// Fake "recent activity" notifications, at most two on screen.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    lifetime: Duration,
    items: VecDeque<ActivityItem>,
}

impl ActivityFeed {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            items: VecDeque::with_capacity(MAX_VISIBLE_ACTIVITY + 1),
        }
    }

    /// Append a random notification, dropping the oldest beyond the cap.
    pub fn push_random<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> &ActivityItem {
        let template = TEMPLATES.choose(rng).unwrap_or(&TEMPLATES[0]);
        let item = ActivityItem {
            name: NAMES.choose(rng).copied().unwrap_or("Sam"),
            location: LOCATIONS.choose(rng).copied().unwrap_or("Austin"),
            action: template.action,
            item: template.items.choose(rng).copied().unwrap_or(""),
            color: COLORS.choose(rng).copied().unwrap_or("#a78bfa"),
            expires_at: now + self.lifetime,
        };
        self.items.push_back(item);
        while self.items.len() > MAX_VISIBLE_ACTIVITY {
            self.items.pop_front();
        }
        &self.items[self.items.len() - 1]
    }

    /// Drop expired items and return what is still visible, oldest first.
    pub fn visible(&mut self, now: Instant) -> impl Iterator<Item = &ActivityItem> {
        self.items.retain(|i| now < i.expires_at);
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn keeps_at_most_two() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = Instant::now();
        let mut feed = ActivityFeed::new(Duration::from_millis(5500));
        for _ in 0..5 {
            feed.push_random(&mut rng, now);
        }
        assert_eq!(feed.len(), MAX_VISIBLE_ACTIVITY);
    }

    #[test]
    fn items_expire() {
        let mut rng = StdRng::seed_from_u64(2);
        let now = Instant::now();
        let mut feed = ActivityFeed::new(Duration::from_millis(5500));
        feed.push_random(&mut rng, now);
        feed.push_random(&mut rng, now + Duration::from_millis(3000));

        assert_eq!(feed.visible(now + Duration::from_millis(5499)).count(), 2);
        assert_eq!(feed.visible(now + Duration::from_millis(5500)).count(), 1);
        assert_eq!(feed.visible(now + Duration::from_millis(8500)).count(), 0);
    }

    #[test]
    fn text_reads_naturally() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut feed = ActivityFeed::new(Duration::from_secs(1));
        let item = feed.push_random(&mut rng, Instant::now());
        let text = item.text();
        assert!(text.starts_with(item.name));
        assert!(text.contains(&format!(" from {} ", item.location)));
        assert!(text.ends_with(item.item));
    }
}
