use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::Block,
};

use crate::presentation::view_models::BrowseScreenViewModel;
use crate::presentation::views::tui::overlay::centered;
use crate::presentation::views::tui::{
    AgentDetailPanelView, AgentListComponent, CompareTableView, ConfettiView, DecorPanelView,
    FilterBarView, HeaderView, NewsletterView, Palette, StatusBarView, ToastView,
};

const DECOR_HEIGHT: u16 = 7;

pub(crate) fn draw(f: &mut Frame, screen: &BrowseScreenViewModel, list: &mut AgentListComponent) {
    let palette = Palette::for_theme(&screen.theme);
    let area = f.area();
    f.render_widget(Block::default().style(palette.base()), area);

    let decor_height = match &screen.decorations {
        Some(_) if area.height > 30 => DECOR_HEIGHT,
        _ => 0,
    };
    let [header, filters, main, decor, status] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(decor_height),
        Constraint::Length(3),
    ])
    .areas(area);

    f.render_widget(HeaderView::new(screen, palette), header);
    f.render_widget(FilterBarView::new(screen, palette), filters);
    list.render(f, main, &screen.directory, screen.selected, palette);
    if let Some(model) = screen.decorations.as_ref().filter(|_| decor_height > 0) {
        f.render_widget(DecorPanelView::new(model, palette), decor);
    }
    f.render_widget(StatusBarView::new(screen, palette), status);

    draw_overlays(f, screen, palette, area);
}

fn draw_overlays(f: &mut Frame, screen: &BrowseScreenViewModel, palette: Palette, area: Rect) {
    if let Some(detail) = &screen.detail {
        f.render_widget(AgentDetailPanelView::new(detail, palette), centered(area, 80, 85));
    }
    if let Some(compare) = &screen.comparison {
        f.render_widget(CompareTableView::new(compare, palette), centered(area, 90, 50));
    }
    if let Some(input) = &screen.newsletter {
        let mut prompt = centered(area, 50, 30);
        prompt.height = prompt.height.max(7).min(area.height);
        f.render_widget(NewsletterView::new(input, palette), prompt);
    }
    if let Some(decor) = &screen.decorations {
        if !decor.confetti.is_empty() {
            f.render_widget(ConfettiView::new(&decor.confetti), area);
        }
    }
    if let Some(message) = &screen.toast {
        let toast = ToastView::new(message, palette);
        let toast_area = toast.area(area);
        f.render_widget(toast, toast_area);
    }
}
