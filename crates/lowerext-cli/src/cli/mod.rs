//! CLI for lowerext.

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use lowerext_core::RenameOptions;
use std::path::PathBuf;

/// Recursively rename `.JPG` (and optionally `.JPEG`) files to lowercase extensions.
#[derive(Debug, Parser)]
#[command(name = "lowerext")]
#[command(about = "Lowercase .JPG/.JPEG extensions, safe on case-insensitive filesystems", long_about = None)]
pub struct Cli {
    /// Also rename .JPEG -> .jpeg.
    #[arg(long)]
    pub include_jpeg: bool,

    /// Only show what would happen; change nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// If a lowercase target already exists as a separate file, overwrite it.
    #[arg(long)]
    pub replace: bool,

    /// Directory to process (default: the directory containing this executable).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print the final summary as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn options(&self) -> RenameOptions {
        RenameOptions {
            include_jpeg: self.include_jpeg,
            dry_run: self.dry_run,
            replace: self.replace,
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let root = resolve_root(cli.root.as_deref())?;
        let opts = cli.options();
        tracing::debug!("resolved root {} with {:?}", root.display(), opts);

        let summary = lowerext_core::run(&root, &opts, |report| {
            println!("{}", output::report_line(report));
        })?;

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!();
            print!("{}", output::summary_block(&summary));
        }
        Ok(())
    }
}

/// Absolute root to walk: `--root` if given, else the executable's directory.
fn resolve_root(explicit: Option<&std::path::Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let exe = std::env::current_exe().context("cannot locate the running executable")?;
            exe.parent()
                .map(|p| p.to_path_buf())
                .context("executable has no parent directory")?
        }
    };
    std::path::absolute(&root).with_context(|| format!("cannot resolve {}", root.display()))
}
