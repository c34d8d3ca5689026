use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use agentstack_runtime::{SubmissionForm, subscribe};
use anyhow::Result;

pub fn handle_submit(form: &SubmissionForm, format: OutputFormat) -> Result<()> {
    let receipt = form.submit()?;
    HandlerContext::standard(format).render(presenters::present_submission(&receipt))
}

pub fn handle_subscribe(email: &str, format: OutputFormat) -> Result<()> {
    let subscription = subscribe(email)?;
    HandlerContext::standard(format).render(presenters::present_subscription(&subscription))
}
