//! # Apply Command Implementation
//!
//! This module implements the `apply` subcommand, the manual invocation
//! mode. It scans the identity catalog, walks the repository (and its
//! declared submodules), and applies a resolved identity per level.
//!
//! ## Functionality
//!
//! - **Automatic resolution**: zero/one-candidate repositories are applied
//!   without interaction.
//! - **Interactive selection**: ambiguous candidate sets open a fuzzy-select
//!   prompt, pre-selecting the best-correlated candidate when one exists.
//! - **Batch mode**: `--batch` (or a non-attended terminal) never prompts;
//!   ambiguous repositories are skipped with a diagnostic.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use git_persona::catalog::Catalog;
use git_persona::defaults;
use git_persona::output::{self, OutputConfig};
use git_persona::prompt::{Selector, TermSelector};
use git_persona::walker::{self, PassOutcome, Workspace};

/// Resolve and apply a commit identity to the current repository
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Repository working copy to resolve (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Never prompt; apply only unambiguous resolutions
    #[arg(long)]
    pub batch: bool,

    /// Do not recurse into declared submodules
    #[arg(long)]
    pub no_submodules: bool,
}

/// Execute the `apply` command.
pub fn execute(args: ApplyArgs, out: &OutputConfig) -> Result<()> {
    // Report the target as the user named it: `.` for the current directory,
    // the `--dir` value otherwise.
    let (root, display_path) = match args.dir {
        Some(dir) => {
            let label = dir.display().to_string();
            (dir, label)
        }
        None => (std::env::current_dir()?, ".".to_string()),
    };

    let catalog_root = defaults::catalog_root();
    let catalog = Catalog::scan(&catalog_root)?;

    let interactive = !args.batch && console::user_attended();
    let selector = TermSelector;
    let selector: Option<&dyn Selector> = interactive.then_some(&selector);

    let workspaces = if args.no_submodules {
        let git_dir = git_persona::gitconfig::resolve_git_dir(&root)?;
        vec![Workspace {
            display_path,
            work_dir: root,
            git_dir,
        }]
    } else {
        walker::discover(&root, &display_path)?
    };

    for workspace in &workspaces {
        report(
            workspace,
            walker::resolve_workspace(workspace, &catalog, selector)?,
            out,
        );
    }

    Ok(())
}

/// Print the outcome of one repository pass.
pub(crate) fn report(workspace: &Workspace, outcome: PassOutcome, out: &OutputConfig) {
    match outcome {
        PassOutcome::Applied { key } => {
            println!(
                "{} {}: using identity {}",
                output::success(out, "applied"),
                workspace.display_path,
                output::emphasize(out, &key)
            );
        }
        PassOutcome::Skipped { candidates } => {
            println!(
                "{} {}: no unambiguous identity among [{}]",
                output::warning(out, "skipped"),
                workspace.display_path,
                candidates.join(", ")
            );
            println!("  run 'git-persona apply' inside the repository to choose one");
        }
    }
}
