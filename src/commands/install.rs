//! Install command implementation
//!
//! The installation is a strictly linear sequence:
//! 1. Resolve the bundled resource root relative to the running executable
//! 2. Resolve the destination root from the chosen layout
//! 3. Copy the skill tree into the destination
//! 4. Place the default config unless one already exists
//!
//! Any I/O failure aborts the whole install; partially-copied entries are
//! left in place.

use std::fs;

use console::Style;
use normpath::PathExt;

use crate::cli::InstallArgs;
use crate::error::{CouncilError, Result};
use crate::installer::{ConfigInstall, InstallLayout, Installer, file_ops};
use crate::progress::ProgressDisplay;
use crate::resources::{self, CLAUDE_DIR, CONFIG_FILE, SKILLS_DIR};

const BANNER_WIDTH: usize = 60;

fn print_banner() {
    let cyan = Style::new().cyan();
    let rule = "━".repeat(BANNER_WIDTH);
    println!("{}", cyan.apply_to(&rule));
    println!("{}", cyan.apply_to("  Agent Council - Installation"));
    println!("{}", cyan.apply_to(&rule));
    println!();
}

fn print_completion(layout: &InstallLayout, dry_run: bool) {
    let green = Style::new().green();
    let cyan = Style::new().cyan();
    let rule = "━".repeat(BANNER_WIDTH);

    println!("{}", green.apply_to(&rule));
    if dry_run {
        println!("{}", green.apply_to("  [DRY RUN] No files were written"));
    } else {
        println!("{}", green.apply_to("  Installation complete!"));
    }
    println!("{}", green.apply_to(&rule));
    println!();

    let skills_prefix = match layout {
        InstallLayout::Flat => format!("./{}", SKILLS_DIR),
        InstallLayout::Nested { dir } => format!("./{}/{}", dir, SKILLS_DIR),
    };

    println!("{}", cyan.apply_to("Usage in Claude:"));
    println!("  \"Summon the council\"");
    println!("  \"Let's hear opinions from other AIs\"");
    println!();
    println!("{}", cyan.apply_to("Direct execution:"));
    println!(
        "  {}/agent-council/scripts/council.sh \"your question\"",
        skills_prefix
    );
    println!();
    println!(
        "{}",
        Style::new()
            .yellow()
            .apply_to("Note: Make sure codex and gemini CLIs are installed.")
    );
}

/// Run the install command
pub fn run(args: InstallArgs) -> Result<()> {
    let resource_root = resources::locate(args.resource_root.as_deref())?;

    let target = match args.target {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| CouncilError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };

    if !args.dry_run {
        fs::create_dir_all(&target).map_err(|e| file_ops::dir_create_error(&target, e))?;
    }

    // Normalize to handle macOS /private/var symlinks
    let target = target
        .normalize()
        .map(|np| np.into_path_buf())
        .unwrap_or(target);

    let layout = if args.claude {
        InstallLayout::nested(CLAUDE_DIR)
    } else {
        InstallLayout::Flat
    };
    let dest_root = layout.root(&target);

    let skills_src = resource_root.join(SKILLS_DIR);
    let config_src = resource_root.join(CONFIG_FILE);

    if !skills_src.is_dir() && !config_src.is_file() {
        println!("Nothing to install.");
        return Ok(());
    }

    print_banner();

    if !args.dry_run {
        fs::create_dir_all(&dest_root).map_err(|e| file_ops::dir_create_error(&dest_root, e))?;
    }

    let yellow = Style::new().yellow();
    let green = Style::new().green();

    let total_files = if skills_src.is_dir() {
        file_ops::count_files(&skills_src)
    } else {
        0
    };
    let progress = (!args.dry_run && total_files > 0).then(|| ProgressDisplay::new(total_files));
    let installer = Installer::new(args.dry_run, progress.as_ref());

    if skills_src.is_dir() {
        if args.dry_run {
            println!("{}", yellow.apply_to("[DRY RUN] Would install skills..."));
        } else {
            println!("{}", yellow.apply_to("Installing skills..."));
        }

        let skills_dest = dest_root.join(SKILLS_DIR);
        let copied = match installer.copy_tree(&skills_src, &skills_dest) {
            Ok(copied) => copied,
            Err(e) => {
                if let Some(ref progress) = progress {
                    progress.abandon();
                }
                return Err(e);
            }
        };
        if let Some(ref progress) = progress {
            progress.finish();
        }

        println!(
            "{}",
            green.apply_to(format!(
                "  ✓ {} file(s) in {}",
                copied,
                skills_dest.display()
            ))
        );
    }

    let config_dest = layout.config_destination(&dest_root);
    match installer.install_config(&config_src, &config_dest)? {
        ConfigInstall::Installed => {
            if args.dry_run {
                println!("{}", yellow.apply_to("[DRY RUN] Would install config..."));
            } else {
                println!("{}", yellow.apply_to("Installing config..."));
            }
            println!("{}", green.apply_to(format!("  ✓ {}", CONFIG_FILE)));
        }
        ConfigInstall::AlreadyPresent => {
            println!(
                "{}",
                yellow.apply_to(format!("  ⓘ {} already exists, skipping", CONFIG_FILE))
            );
        }
        ConfigInstall::NoDefault => {}
    }

    println!();
    print_completion(&layout, args.dry_run);

    Ok(())
}
