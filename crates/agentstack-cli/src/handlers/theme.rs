use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use agentstack_types::Theme;
use anyhow::Result;

pub fn handle_get(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let theme = ctx.stack()?.theme()?;
    HandlerContext::standard(format).render(presenters::present_theme(theme, None))
}

pub fn handle_set(ctx: &ExecutionContext, theme: Theme, format: OutputFormat) -> Result<()> {
    let mut themes = ctx.stack()?.themes();
    let previous = themes.load()?;
    themes.save(theme)?;
    HandlerContext::standard(format).render(presenters::present_theme(theme, Some(previous)))
}

pub fn handle_toggle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let mut themes = ctx.stack()?.themes();
    let previous = themes.load()?;
    let theme = themes.toggle()?;
    HandlerContext::standard(format).render(presenters::present_theme(theme, Some(previous)))
}
