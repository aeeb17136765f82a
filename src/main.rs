use anyhow::Result;
use clap::Parser;
use gobo::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.no_color);

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    match cli.command {
        Commands::ConsiderTable(args) => gobo::consider_run(args, &ctx),
        Commands::ObsoleteStats(args) => gobo::stats_run(args, &ctx),
        Commands::Metacyc(args) => gobo::metacyc_run(args, &ctx),
        Commands::Init(args) => gobo::infra::config::init(args, &ctx),
        Commands::Completions(args) => gobo::completion::run(args),
    }
}

/// Diagnostics go to stderr and default to warnings; RUST_LOG overrides.
fn init_tracing(no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}
