use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, SubmissionViewModel, SubscriptionViewModel,
};
use agentstack_runtime::{SubmissionReceipt, Subscription};

pub fn present_submission(receipt: &SubmissionReceipt) -> CommandResultViewModel<SubmissionViewModel> {
    let content = SubmissionViewModel {
        receipt: receipt.id.to_string(),
        agent: receipt.agent.clone(),
        tier: receipt.tier.as_str().to_string(),
        tier_label: receipt.tier.label().to_string(),
        price: receipt.tier.price().to_string(),
        message: receipt.message.to_string(),
    };
    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Submission received"))
        .with_suggestion(Guidance::new("See what is already listed").with_command(cmd::LIST))
}

pub fn present_subscription(subscription: &Subscription) -> CommandResultViewModel<SubscriptionViewModel> {
    let content = SubscriptionViewModel {
        email: subscription.email.clone(),
        message: subscription.message.to_string(),
    };
    CommandResultViewModel::new(content).with_badge(StatusBadge::success("Subscribed"))
}
