use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::style::{accent, bold, highlight};
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat, ViewMode};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = result.badge.as_ref().filter(|_| self.mode != ViewMode::Minimal) {
            println!("{} {}", badge.icon(), bold(&badge.label));
            println!();
        }

        print!("{}", result.content.create_view(self.mode));

        if self.mode != ViewMode::Minimal && !result.suggestions.is_empty() {
            println!("\n{}", highlight("💡 Tips:"));
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", accent(cmd));
                }
                println!();
            }
        }

        Ok(())
    }
}
