use crate::args::{DirectoryArgs, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::CsvRenderer;
use crate::types::OutputFormat;
use agentstack_engine::{Filter, SortMode};
use agentstack_runtime::DirectoryController;
use anyhow::Result;
use std::time::Instant;

/// Apply directory flags through the controller so unknown keys are logged
/// the same way the browser logs them.
pub(crate) fn apply_directory_args(controller: &mut DirectoryController, args: &DirectoryArgs) {
    controller.set_filter(Filter::from(args.filter.as_str()));
    controller.set_sort(SortMode::from(args.sort.as_str()));
    if let Some(query) = &args.search {
        controller.type_query(query.clone(), Instant::now());
        controller.submit_search();
    }
}

pub fn handle(
    ctx: &ExecutionContext,
    args: &DirectoryArgs,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let stack = ctx.stack()?;
    let mut controller = stack.controller();
    apply_directory_args(&mut controller, args);

    let view = controller.view();
    let directory = presenters::present_directory(controller.catalog(), controller.state(), &view);

    if format == OutputFormat::Csv {
        return CsvRenderer::stdout().render_directory(&directory);
    }

    let handler_ctx = HandlerContext::new(format, view_mode);
    handler_ctx.render(presenters::present_list(directory))
}
