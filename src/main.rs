//! Council - Agent Council installer
//!
//! A command line tool that copies the bundled Agent Council skills and
//! default configuration into a host project, either directly under the
//! project root or nested under `.claude/`.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod installer;
mod progress;
mod resources;

use cli::{Cli, Commands, InstallArgs};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Install(args)) => commands::install::run(args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        // Bare invocation installs with defaults; parsing an empty argument
        // list still picks up COUNCIL_TARGET / COUNCIL_RESOURCE_ROOT.
        None => commands::install::run(InstallArgs::parse_from(["council"])),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
