use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install into the current directory:\n    council install\n\n\
                   Install under .claude/:\n    council install --claude\n\n\
                   Install into another project:\n    council install --target ../my-project\n\n\
                   Preview without writing:\n    council install --dry-run")]
pub struct InstallArgs {
    /// Install under .claude/ instead of directly under the project root
    #[arg(long)]
    pub claude: bool,

    /// Target project directory (defaults to the current directory)
    #[arg(long, short = 't', value_name = "DIR", env = "COUNCIL_TARGET")]
    pub target: Option<PathBuf>,

    /// Directory containing the bundled skills and default config
    /// (defaults to a location next to the council executable)
    #[arg(long, value_name = "DIR", env = "COUNCIL_RESOURCE_ROOT")]
    pub resource_root: Option<PathBuf>,

    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,
}
