use crate::args::ViewModeArgs;
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::{ViewMode, presenters};
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat, view_mode: &ViewModeArgs) -> Result<()> {
    let stack = ctx.stack()?;
    let handler_ctx = HandlerContext::with_default(format, view_mode, ViewMode::Standard);
    handler_ctx.render(presenters::present_categories(stack.catalog()))
}
