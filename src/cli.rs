use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Class Tree Viewer - browse classification decision trees
#[derive(Parser, Debug)]
#[command(name = "class-tree-viewer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse a tree interactively
    View(ViewArgs),

    /// Print the tree view as a text table
    Dump(DumpArgs),

    /// Print the decision rule leading to a node
    Rule(RuleArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Tree document (JSON); start empty if omitted
    pub path: Option<PathBuf>,

    /// Write the examples of the last selected node here on exit
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Don't save display settings on exit
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Tree document (JSON)
    pub path: PathBuf,

    /// Expand to this level (1-9); everything is open if omitted
    #[arg(short, long, value_name = "N")]
    pub level: Option<u8>,

    /// Target class, by value name or index
    #[arg(short, long, value_name = "CLASS")]
    pub target: Option<String>,

    /// Columns to show (comma-separated), overriding the config
    #[arg(short = 'C', long, value_delimiter = ',', value_name = "COLUMNS")]
    pub columns: Option<Vec<String>>,
}

#[derive(Args, Debug)]
pub struct RuleArgs {
    /// Tree document (JSON)
    pub path: PathBuf,

    /// Branch indices from the root (comma-separated); the root if omitted
    #[arg(short, long, value_delimiter = ',', value_name = "PATH")]
    pub node: Vec<usize>,

    /// Also print the node's examples as JSON
    #[arg(short, long)]
    pub examples: bool,
}
