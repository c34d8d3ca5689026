//! Console color policy.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::sync::LazyLock;

static COLOR_ENABLED: LazyLock<bool> = LazyLock::new(|| {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
});

/// True when stdout is a terminal and `NO_COLOR` is unset.
pub fn color_enabled() -> bool {
    *COLOR_ENABLED
}

pub fn bold(text: &str) -> String {
    if color_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if color_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn accent(text: &str) -> String {
    if color_enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

pub fn highlight(text: &str) -> String {
    if color_enabled() {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn positive(text: &str) -> String {
    if color_enabled() {
        text.green().to_string()
    } else {
        text.to_string()
    }
}
