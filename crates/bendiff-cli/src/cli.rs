use std::path::PathBuf;

use bendiff_diff::WhitespaceMode;
use bendiff_render::ViewMode;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bendiff",
    about = "Line-level diff with inline and side-by-side views",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with default settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the differences between two files
    Diff(DiffArgs),
    /// Count hunks and added/deleted lines
    Stats(StatsArgs),
    /// List change locations or move a change cursor
    Changes(ChangesArgs),
}

/// The two inputs and how to compare their lines.
#[derive(Args)]
pub struct CompareArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// exact, ignore-trailing or ignore-all
    #[arg(short = 'w', long)]
    pub whitespace: Option<WhitespaceMode>,
}

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub compare: CompareArgs,
    /// inline or side-by-side
    #[arg(long)]
    pub view: Option<ViewMode>,
    #[arg(long)]
    pub no_color: bool,
    #[arg(long)]
    pub no_line_numbers: bool,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub compare: CompareArgs,
}

#[derive(Args)]
pub struct ChangesArgs {
    #[command(flatten)]
    pub compare: CompareArgs,
    /// Index of the change the cursor is on
    #[arg(long)]
    pub current: Option<usize>,
    #[arg(long, conflicts_with = "prev")]
    pub next: bool,
    #[arg(long)]
    pub prev: bool,
}
