use crate::context::ExecutionContext;
use crate::presentation::renderers::tui::{App, TuiBrowser};
use agentstack_runtime::decor::carousel::per_page_for_columns;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;

pub fn handle(ctx: &ExecutionContext, decorations: bool) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("`agentstack browse` needs an interactive terminal; try `agentstack list`");
    }

    let stack = ctx.stack()?;
    let columns = crate::presentation::formatters::terminal_width() as u16;
    let decor = stack.decorations(per_page_for_columns(columns), decorations);
    let app = App::new(stack.controller(), decor, stack.themes())?;

    TuiBrowser::run(app)
}
