use terminal_size::{Width, terminal_size};

/// Width used when stdout is not a terminal.
pub const DEFAULT_WIDTH: usize = 100;

pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Cut `text` to at most `max` characters, ending in `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let head: String = text.chars().take(max - 3).collect();
    format!("{}...", head)
}
