use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub stars: u8,
    pub color: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Sarah Chen",
        role: "VP Engineering, Scale AI",
        text: "AgentStack saved us 40+ hours evaluating AI agents. We found our perfect coding assistant in minutes, not months.",
        stars: 5,
        color: "#a78bfa",
    },
    Testimonial {
        name: "Marcus Wright",
        role: "CTO, Replicate",
        text: "The comparison feature is a game-changer. We tested 6 agents side-by-side and made a confident decision the same day.",
        stars: 5,
        color: "#06b6d4",
    },
    Testimonial {
        name: "Priya Sharma",
        role: "Head of AI, Notion",
        text: "Listed our agent on AgentStack and got 2,000+ qualified leads in the first month. The ROI is incredible.",
        stars: 5,
        color: "#f472b6",
    },
    Testimonial {
        name: "James Okafor",
        role: "Founder, DevTools.ai",
        text: "The quality of traffic from AgentStack is unmatched. Buyers here are ready to commit, not just browse.",
        stars: 5,
        color: "#34d399",
    },
    Testimonial {
        name: "Lisa Zhang",
        role: "Product Lead, Hugging Face",
        text: "Finally a marketplace that understands AI agents. The categorization and filtering are spot-on.",
        stars: 5,
        color: "#fbbf24",
    },
    Testimonial {
        name: "David Kim",
        role: "Engineering Manager, Stripe",
        text: "We use AgentStack to discover new tools for our team. The reviews and ratings are genuinely helpful.",
        stars: 4,
        color: "#818cf8",
    },
];

/// Cards per page for a viewport width in pixels.
pub fn per_page_for_width(width_px: u32) -> usize {
    match width_px {
        0..=768 => 1,
        769..=1100 => 2,
        _ => 3,
    }
}

/// Terminal columns stand in for pixels at ten pixels per column.
pub fn per_page_for_columns(columns: u16) -> usize {
    per_page_for_width(u32::from(columns) * 10)
}

/// Paged testimonial carousel that wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_page: usize,
    page: usize,
}

impl Carousel {
    pub fn new(len: usize, per_page: usize) -> Self {
        Self {
            len,
            per_page: per_page.max(1),
            page: 0,
        }
    }

    pub fn for_testimonials(per_page: usize) -> Self {
        Self::new(TESTIMONIALS.len(), per_page)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.per_page)
    }

    /// Move to the next page, wrapping to the first.
    pub fn advance(&mut self) {
        let count = self.page_count();
        if count > 0 {
            self.page = (self.page + 1) % count;
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    /// Change the page size after a resize, keeping the page in range.
    pub fn resize(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.go_to(self.page);
    }

    /// Index range of the items on the current page.
    pub fn visible(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.per_page).min(self.len);
        start..(start + self.per_page).min(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_page_breakpoints() {
        assert_eq!(per_page_for_width(375), 1);
        assert_eq!(per_page_for_width(768), 1);
        assert_eq!(per_page_for_width(769), 2);
        assert_eq!(per_page_for_width(1100), 2);
        assert_eq!(per_page_for_width(1440), 3);
        assert_eq!(per_page_for_columns(80), 2);
        assert_eq!(per_page_for_columns(120), 3);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Carousel::for_testimonials(1).page_count(), 6);
        assert_eq!(Carousel::for_testimonials(2).page_count(), 3);
        assert_eq!(Carousel::for_testimonials(3).page_count(), 2);
        assert_eq!(Carousel::new(5, 2).page_count(), 3);
    }

    #[test]
    fn advance_wraps() {
        let mut carousel = Carousel::for_testimonials(3);
        carousel.advance();
        assert_eq!(carousel.visible(), 3..6);
        carousel.advance();
        assert_eq!(carousel.page(), 0);
        assert_eq!(carousel.visible(), 0..3);
    }

    #[test]
    fn resize_clamps_page() {
        let mut carousel = Carousel::for_testimonials(1);
        carousel.go_to(5);
        carousel.resize(3);
        assert_eq!(carousel.page(), 1);
        assert_eq!(carousel.visible(), 3..6);
    }

    #[test]
    fn last_page_may_be_short() {
        let mut carousel = Carousel::new(5, 2);
        carousel.go_to(2);
        assert_eq!(carousel.visible(), 4..5);
    }
}
