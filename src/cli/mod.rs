//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod install;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;

/// Council - Agent Council installer
///
/// Copies the bundled Agent Council skills and default configuration into a
/// host project.
#[derive(Parser, Debug)]
#[command(
    name = "council",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer for the Agent Council skills and default configuration",
    long_about = "Council installs the bundled Agent Council skill files into a host project, \
                  either directly under the project root or nested under .claude/, and places \
                  a default council.config.yaml without ever overwriting an existing one.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  council                        \x1b[90m# Install into the current directory\x1b[0m\n   \
                  council install --claude       \x1b[90m# Install under .claude/\x1b[0m\n   \
                  council install -t ../proj     \x1b[90m# Install into another project\x1b[0m\n   \
                  council install --dry-run      \x1b[90m# Show what would be installed\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the bundled skills and default configuration
    Install(InstallArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
