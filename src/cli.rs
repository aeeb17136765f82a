use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
}

#[derive(Parser)]
#[command(name = "gobo")]
#[command(
    about = "A fast, lightweight CLI for extracting obsolete-term reports from Gene Ontology OBO files"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential diagnostics on stderr
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List obsolete terms with their consider/alt_id alternatives
    ConsiderTable(ReportArgs),

    /// Count obsolete terms per namespace
    ObsoleteStats(ReportArgs),

    /// Look up terms by MetaCyc cross-reference
    Metacyc(MetacycArgs),

    /// Initialize a gobo.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// OBO input files (.obo or .obo.gz), processed in order
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Restrict to these namespaces (repeatable)
    #[arg(long = "namespace", value_name = "NS")]
    pub namespaces: Vec<String>,

    /// Regex applied to term names
    #[arg(long, value_name = "REGEX")]
    pub name_pattern: Option<String>,

    /// Write rows to this file instead of stdout (must end in .tab)
    #[arg(short, long, value_name = "FILE.tab")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct MetacycArgs {
    /// MetaCyc identifier (must contain RXN or PWY)
    #[arg(long, value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
