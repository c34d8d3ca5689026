use crate::args::hints::cmd;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge, ThemeViewModel};
use agentstack_types::Theme;

pub fn present_theme(theme: Theme, previous: Option<Theme>) -> CommandResultViewModel<ThemeViewModel> {
    let content = ThemeViewModel { theme, previous };
    match previous {
        None => CommandResultViewModel::new(content).with_suggestion(
            Guidance::new("Switch between light and dark").with_command(cmd::THEME_TOGGLE),
        ),
        Some(prev) if prev == theme => {
            CommandResultViewModel::new(content).with_badge(StatusBadge::info("Theme unchanged"))
        }
        Some(_) => CommandResultViewModel::new(content).with_badge(StatusBadge::success("Theme saved")),
    }
}
