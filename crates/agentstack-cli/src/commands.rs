use super::args::{Cli, Commands, SiteCommand, ThemeCommand, hints::cmd};
use super::context::ExecutionContext;
use super::handlers;
use crate::logging::{self, LogTarget};
use crate::types::OutputFormat;
use agentstack_runtime::resolve_data_dir;
use anyhow::{Result, bail};

pub fn run(cli: Cli) -> Result<()> {
    let target = match cli.command {
        Some(Commands::Browse { .. }) => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    if cli.format == OutputFormat::Csv && !matches!(command, Commands::List { .. }) {
        bail!("--format csv is only supported by `agentstack list`");
    }

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.catalog);
    let format = cli.format;

    match command {
        Commands::List {
            directory,
            view_mode,
        } => handlers::list::handle(&ctx, &directory, format, &view_mode),

        Commands::Show { id, view_mode } => handlers::show::handle(&ctx, &id, format, &view_mode),

        Commands::Compare { ids } => handlers::compare::handle(&ctx, &ids, format),

        Commands::Categories { view_mode } => handlers::categories::handle(&ctx, format, &view_mode),

        Commands::Featured { view_mode } => handlers::featured::handle(&ctx, format, &view_mode),

        Commands::Browse { no_decorations } => handlers::browse::handle(&ctx, !no_decorations),

        Commands::Site { command } => match command {
            SiteCommand::Build {
                out,
                directory,
                compare,
            } => handlers::site::handle(&ctx, &out, &directory, &compare, format),
        },

        Commands::Theme { command } => match command {
            ThemeCommand::Get => handlers::theme::handle_get(&ctx, format),
            ThemeCommand::Set { theme } => handlers::theme::handle_set(&ctx, theme.into(), format),
            ThemeCommand::Toggle => handlers::theme::handle_toggle(&ctx, format),
        },

        Commands::Submit {
            name,
            company,
            tagline,
            description,
            category,
            pricing,
            website,
            email,
            tier,
        } => {
            let form = agentstack_runtime::SubmissionForm {
                name,
                company,
                tagline,
                description,
                category,
                pricing,
                website,
                email,
                tier: tier.into(),
            };
            handlers::forms::handle_submit(&form, format)
        }

        Commands::Subscribe { email } => handlers::forms::handle_subscribe(&email, format),
    }
}

fn show_guidance() {
    println!("agentstack - Directory of AI agents\n");
    println!("Quick commands:");
    println!("  {:<40} # Browse every agent", cmd::LIST);
    println!("  {:<40} # Only open-source agents", cmd::LIST_OPEN_SOURCE);
    println!("  {:<40} # One agent in detail", cmd::SHOW);
    println!("  {:<40} # Side-by-side comparison", cmd::COMPARE);
    println!("  {:<40} # Category tiles", cmd::CATEGORIES);
    println!("  {:<40} # Featured agents", cmd::FEATURED);
    println!("  {:<40} # Interactive browser", cmd::BROWSE);
    println!("  {:<40} # Static HTML site\n", cmd::SITE_BUILD);
    println!("For more commands:");
    println!("  agentstack --help");
}
