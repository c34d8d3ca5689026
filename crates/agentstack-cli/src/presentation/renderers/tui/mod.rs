//! Interactive terminal browser.

mod app;
mod ui;

pub use app::{App, Focus, Modal};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

use agentstack_runtime::PreferenceStore;

/// Frame interval while nothing is scheduled sooner; keeps confetti and
/// toasts moving.
const TICK_RATE: Duration = Duration::from_millis(100);

pub struct TuiBrowser;

impl TuiBrowser {
    pub fn run<S: PreferenceStore>(mut app: App<S>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = Self::event_loop(&mut terminal, &mut app);
        app.stop();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<S: PreferenceStore>(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut App<S>,
    ) -> Result<()> {
        app.resize(terminal.size()?.width);
        app.start(Instant::now());

        while !app.should_quit() {
            let now = Instant::now();
            app.tick(now);
            let screen = app.screen(now);
            terminal.draw(|f| ui::draw(f, &screen, app.list_mut()))?;

            let timeout = app
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(TICK_RATE)
                .min(TICK_RATE);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key, Instant::now())
                    }
                    Event::Resize(width, _) => app.resize(width),
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
