use crate::args::DirectoryArgs;
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::handlers::list::apply_directory_args;
use crate::presentation::presenters::{self, SiteRequest};
use crate::presentation::SiteRenderer;
use crate::types::OutputFormat;
use agentstack_engine::ToggleOutcome;
use agentstack_types::AgentId;
use anyhow::Result;
use chrono::Datelike;
use std::path::Path;
use std::time::Instant;

pub fn handle(
    ctx: &ExecutionContext,
    out: &Path,
    args: &DirectoryArgs,
    compare: &[String],
    format: OutputFormat,
) -> Result<()> {
    let stack = ctx.stack()?;
    let mut controller = stack.controller();
    apply_directory_args(&mut controller, args);

    let now = Instant::now();
    for id in compare {
        if let ToggleOutcome::Rejected(notice) = controller.toggle_compare(&AgentId::new(id.as_str()), now) {
            tracing::warn!(agent = %id, "{}", notice);
        }
    }

    let request = SiteRequest {
        theme: stack.theme()?,
        year: chrono::Local::now().year(),
        state: controller.state().clone(),
    };
    let site = presenters::present_site(controller.catalog(), &request);
    let files = SiteRenderer::new(out).render(&site)?;

    let handler_ctx = HandlerContext::standard(format);
    handler_ctx.render(presenters::present_site_build(out, &site, files))
}
