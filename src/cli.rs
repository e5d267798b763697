use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pkglock")]
#[command(about = "Inspect dependency lockfiles")]
#[command(version)]
pub struct Cli {
    /// Log gateway decisions to stderr
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report whether the lockfile is older than the manifest
    Status(ProjectArgs),

    /// List the packages recorded in the lockfile
    Show(ProjectArgs),

    /// Compare the lockfiles of two projects
    Diff(DiffArgs),
}

#[derive(Parser)]
pub struct ProjectArgs {
    /// Project directory (defaults to the current directory)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Output as JSON instead of table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct DiffArgs {
    /// Project holding the old lockfile
    #[arg(long)]
    pub from: PathBuf,

    /// Project holding the new lockfile
    #[arg(long)]
    pub to: PathBuf,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
