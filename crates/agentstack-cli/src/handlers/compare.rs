use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CompareNoticeViewModel;
use crate::types::OutputFormat;
use agentstack_engine::ToggleOutcome;
use agentstack_types::AgentId;
use anyhow::Result;
use std::time::Instant;

/// Toggle each id in order, then open the comparison.
pub fn handle(ctx: &ExecutionContext, ids: &[String], format: OutputFormat) -> Result<()> {
    let stack = ctx.stack()?;
    let mut controller = stack.controller();
    let now = Instant::now();

    let mut notices = Vec::new();
    for id in ids {
        let notice = match controller.toggle_compare(&AgentId::new(id.as_str()), now) {
            ToggleOutcome::Added => None,
            ToggleOutcome::Removed => Some("listed twice, removed again".to_string()),
            ToggleOutcome::Rejected(notice) => Some(notice.to_string()),
            ToggleOutcome::UnknownAgent(_) => Some("unknown agent".to_string()),
        };
        if let Some(message) = notice {
            notices.push(CompareNoticeViewModel {
                id: id.clone(),
                message,
            });
        }
    }

    let opened = controller.state().compare.open(controller.catalog());
    let handler_ctx = HandlerContext::standard(format);
    handler_ctx.render(presenters::present_compare(opened, notices))
}
