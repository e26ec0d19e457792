use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ErrorPolicy;

/// dirtree - Print a directory as an indented tree diagram
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long, env = "DIRTREE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the root path as the first line
    #[arg(long)]
    pub show_root: bool,

    /// Title line printed before the tree
    #[arg(long, value_name = "TEXT")]
    pub header: Option<String>,

    /// What to do when a subdirectory cannot be listed
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<ErrorPolicy>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
