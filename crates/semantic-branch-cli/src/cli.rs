use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "semantic-branch",
    about = "Classify branch names by their semantic stub",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that a value is a valid semantic name
    Check(CheckArgs),
    /// Match a branch name against a set of stubs
    Match(MatchArgs),
    /// Find the category a branch name belongs to
    Classify(ClassifyArgs),
    /// List every built-in category and its stubs
    List(ListArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    pub name: String,
}

#[derive(Args)]
pub struct MatchArgs {
    pub branch: String,
    /// Stub to match against (repeatable)
    #[arg(short, long = "stub", required = true)]
    pub stubs: Vec<String>,
}

#[derive(Args)]
pub struct ClassifyArgs {
    pub branch: String,
    /// TOML file with extra categories
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Include custom categories from this TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
