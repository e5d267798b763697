use std::path::PathBuf;

use crate::cli::ProjectArgs;

/// Settings for one command. The working directory is only consulted here;
/// library calls receive `project_dir` explicitly.
pub struct Config {
    pub project_dir: PathBuf,
    pub json_output: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_project_args(args: &ProjectArgs, verbose: bool) -> Self {
        let project_dir = args.project_dir.clone().unwrap_or_else(current_dir);

        Config {
            project_dir,
            json_output: args.json,
            verbose,
        }
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
