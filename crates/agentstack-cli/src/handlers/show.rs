use crate::args::ViewModeArgs;
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::{ViewMode, presenters};
use crate::types::OutputFormat;
use agentstack_types::AgentId;
use anyhow::{Result, bail};

pub fn handle(
    ctx: &ExecutionContext,
    id: &str,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let stack = ctx.stack()?;
    let controller = stack.controller();

    let Some(detail) = controller.detail(&AgentId::new(id)) else {
        bail!("Agent not found: {}", id);
    };
    let vm = presenters::present_detail(controller.catalog(), &detail, controller.state());

    let handler_ctx = HandlerContext::with_default(format, view_mode, ViewMode::Standard);
    handler_ctx.render(presenters::present_show(vm))
}
