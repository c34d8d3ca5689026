use crate::presentation::presenters::catalog::{
    present_filter_counts, present_hero, present_sort_options,
};
use crate::presentation::presenters::compare::present_comparison_table;
use crate::presentation::presenters::directory::{present_detail, present_directory};
use crate::presentation::view_models::{
    ActivityViewModel, BrowseScreenViewModel, ConfettiParticleViewModel, DecorViewModel,
    TestimonialViewModel,
};
use agentstack_engine::ComparisonTable;
use agentstack_runtime::decor::{TESTIMONIALS, Testimonial};
use agentstack_runtime::{Decorations, DirectoryController};
use agentstack_types::{AgentId, Theme};
use std::time::Instant;

/// Browser state that lives outside the controller.
pub struct BrowseInput<'a> {
    pub theme: Theme,
    pub search_focused: bool,
    pub detail: Option<&'a AgentId>,
    pub comparison: Option<&'a ComparisonTable>,
    pub newsletter: Option<&'a str>,
}

pub fn present_testimonial(t: &Testimonial) -> TestimonialViewModel {
    TestimonialViewModel {
        name: t.name.to_string(),
        role: t.role.to_string(),
        text: t.text.to_string(),
        stars: t.stars,
        color: t.color.to_string(),
        initial: t.initial(),
    }
}

fn present_decorations(decorations: &mut Decorations, now: Instant) -> DecorViewModel {
    let carousel = decorations.carousel();
    let testimonials = TESTIMONIALS[carousel.visible()]
        .iter()
        .map(present_testimonial)
        .collect();
    let (page, page_count) = (carousel.page(), carousel.page_count());

    let activity = decorations
        .activity(now)
        .iter()
        .map(|item| ActivityViewModel {
            text: item.text(),
            color: item.color.to_string(),
        })
        .collect();

    let confetti = decorations
        .confetti(now)
        .iter()
        .flat_map(|burst| {
            let elapsed = now.saturating_duration_since(burst.started_at);
            burst.particles.iter().filter_map(move |p| {
                p.progress(elapsed).map(|progress| ConfettiParticleViewModel {
                    x: p.x,
                    progress,
                    color: p.color.to_string(),
                    round: p.round,
                })
            })
        })
        .collect();

    DecorViewModel {
        countdown: decorations.countdown_text().to_string(),
        live_count: decorations.live_count(),
        testimonials,
        page,
        page_count,
        activity,
        confetti,
    }
}

pub fn present_browse_screen(
    controller: &mut DirectoryController,
    decorations: &mut Decorations,
    input: &BrowseInput<'_>,
    now: Instant,
) -> BrowseScreenViewModel {
    let toast = controller.toast(now).map(|t| t.message.clone());
    let catalog = controller.catalog();
    let state = controller.state();
    let view = controller.view();

    let hero_values = decorations.hero_values(now);
    let decor = decorations
        .is_enabled()
        .then(|| present_decorations(decorations, now));

    BrowseScreenViewModel {
        theme: input.theme.as_str().to_string(),
        hero: present_hero(catalog, Some(&hero_values)),
        filters: present_filter_counts(catalog, state),
        sorts: present_sort_options(state),
        search_input: controller.search_input().to_string(),
        search_focused: input.search_focused,
        search_pending: controller.search_pending(),
        directory: present_directory(catalog, state, &view),
        selected: controller.selected_index(),
        compare_names: state
            .compare
            .ids()
            .iter()
            .filter_map(|id| catalog.agent(id).map(|a| a.name.clone()))
            .collect(),
        detail: input
            .detail
            .and_then(|id| controller.detail(id))
            .map(|d| present_detail(catalog, &d, state)),
        comparison: input.comparison.map(present_comparison_table),
        newsletter: input.newsletter.map(str::to_string),
        decorations: decor,
        toast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentstack_runtime::DecorationConfig;
    use agentstack_types::Catalog;
    use std::sync::Arc;
    use std::time::Duration;

    fn controller() -> DirectoryController {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        DirectoryController::with_timing(catalog, Duration::from_millis(250), Duration::from_secs(3))
    }

    fn input() -> BrowseInput<'static> {
        BrowseInput {
            theme: Theme::Dark,
            search_focused: false,
            detail: None,
            comparison: None,
            newsletter: None,
        }
    }

    #[test]
    fn test_disabled_decorations_show_final_hero_values() {
        let now = Instant::now();
        let mut c = controller();
        let mut decor = Decorations::new(DecorationConfig::disabled(), 3, &[42, 8, 18, 100]);
        let screen = present_browse_screen(&mut c, &mut decor, &input(), now);

        assert!(screen.decorations.is_none());
        assert_eq!(screen.hero[0].value, 42);
        assert_eq!(screen.directory.shown, 42);
        assert_eq!(screen.theme, "dark");
    }

    #[test]
    fn test_screen_carries_toast_and_compare_names() {
        let now = Instant::now();
        let mut c = controller();
        c.toggle_compare(&AgentId::new("devin"), now);
        c.open_compare(now);
        let mut decor = Decorations::new(DecorationConfig::default(), 2, &[1, 2, 3, 4]);
        decor.start(now);
        let screen = present_browse_screen(&mut c, &mut decor, &input(), now);

        assert_eq!(screen.toast.as_deref(), Some("Select at least 2 agents to compare"));
        assert_eq!(screen.compare_names.len(), 1);
        let decorations = screen.decorations.unwrap();
        assert_eq!(decorations.testimonials.len(), 2);
        assert_eq!(decorations.page_count, 3);
    }
}
