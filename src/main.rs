use clap::Parser;
use pkglock::cli::{Cli, Command, DiffArgs};
use pkglock::config::Config;
use pkglock::lockfile::{self, diff, freshness};
use pkglock::logging;
use pkglock::report::{self, json, table, StatusReport};
use pkglock::resolve::ResolvedDeps;
use std::path::Path;

fn read_or_exit(project_dir: &Path) -> ResolvedDeps {
    match lockfile::read(project_dir) {
        Ok(Some(deps)) => deps,
        Ok(None) => {
            eprintln!(
                "No {} found in {}.",
                lockfile::LOCKFILE_NAME,
                project_dir.display()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn run_diff(args: &DiffArgs) {
    let from = read_or_exit(&args.from);
    let to = read_or_exit(&args.to);
    let result = diff::compare(&from, &to);

    if args.json {
        println!("{}", json::render(&result));
    } else {
        println!("\nComparing lockfiles:");
        println!("  From: {}", args.from.display());
        println!("  To:   {}", args.to.display());
        println!();
        print!("{}", table::render_diff(&result));
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Status(args) => {
            let config = Config::from_project_args(&args, cli.verbose);

            match freshness::check(&config.project_dir) {
                Ok(freshness) => {
                    let status = StatusReport::new(&config.project_dir, &freshness);
                    if config.json_output {
                        println!("{}", json::render(&status));
                    } else {
                        print!("{}", table::render_status(&status));
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Show(args) => {
            let config = Config::from_project_args(&args, cli.verbose);
            let deps = read_or_exit(&config.project_dir);
            let rows = report::package_rows(&deps);

            if config.json_output {
                println!("{}", json::render(&rows));
            } else {
                print!("{}", table::render_packages(&rows));
                if config.verbose {
                    let unversioned = deps
                        .values()
                        .flatten()
                        .flatten()
                        .filter(|dep| dep.has_placeholder_version())
                        .count();
                    println!("{unversioned} dependency edges without recorded versions");
                }
            }
        }
        Command::Diff(args) => run_diff(&args),
    }
}
