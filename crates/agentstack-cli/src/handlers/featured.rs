use crate::args::ViewModeArgs;
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat, view_mode: &ViewModeArgs) -> Result<()> {
    let stack = ctx.stack()?;
    let handler_ctx = HandlerContext::new(format, view_mode);
    handler_ctx.render(presenters::present_featured(stack.catalog()))
}
