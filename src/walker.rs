//! # Repository Walker
//!
//! Discovers the set of repositories a run operates on: the top-level
//! working copy plus every submodule declared in `.gitmodules`, recursively.
//! Each discovered [`Workspace`] gets an independent resolution pass later;
//! a submodule with no matching identity never blocks its siblings or its
//! parent.
//!
//! Discovery itself is strict: any visited directory that is not a valid
//! git repository aborts the whole walk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ini::Ini;
use log::debug;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::gitconfig;
use crate::matcher::RemoteDescriptor;
use crate::policy::{self, ResolutionOutcome};
use crate::prompt::Selector;

/// One repository level to resolve: the top-level working copy or a
/// (possibly nested) submodule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Nominal path reported to the user, e.g. `.` or `./libs/util`.
    pub display_path: String,
    /// The working copy directory.
    pub work_dir: PathBuf,
    /// The resolved git metadata directory (holds the local config file).
    pub git_dir: PathBuf,
}

/// A submodule declaration from `.gitmodules`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SubmoduleEntry {
    name: String,
    path: String,
}

/// Discover the top-level repository at `root` and all declared submodules,
/// depth-first in declaration order. `display_path` labels the top level in
/// reports (`.` for the current directory); submodule labels nest under it.
pub fn discover(root: &Path, display_path: &str) -> Result<Vec<Workspace>> {
    let mut workspaces = Vec::new();
    discover_into(root, display_path, &mut workspaces)?;
    Ok(workspaces)
}

fn discover_into(work_dir: &Path, display_path: &str, out: &mut Vec<Workspace>) -> Result<()> {
    let git_dir = gitconfig::resolve_git_dir(work_dir)?;
    debug!(
        "discovered repository {} (gitdir {})",
        display_path,
        git_dir.display()
    );
    out.push(Workspace {
        display_path: display_path.to_string(),
        work_dir: work_dir.to_path_buf(),
        git_dir,
    });

    let gitmodules = work_dir.join(".gitmodules");
    if !gitmodules.is_file() {
        return Ok(());
    }

    for submodule in parse_gitmodules(&gitmodules)? {
        let sub_work = work_dir.join(&submodule.path);
        let sub_display = format!("{}/{}", display_path, submodule.path);
        debug!("entering submodule '{}' at {}", submodule.name, sub_display);
        // A declared but invalid (or absent) submodule checkout is fatal for
        // the whole walk, matching the top-level behavior.
        discover_into(&sub_work, &sub_display, out)?;
    }

    Ok(())
}

/// Result of one repository-level resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// The identity with this key was written to the local config.
    Applied { key: String },
    /// No identity was applied; either no selector was available for an
    /// ambiguous candidate set, or the user dismissed the prompt.
    Skipped { candidates: Vec<String> },
}

/// Run the full resolution pipeline for one workspace: load remotes,
/// evaluate the policy, optionally prompt, and apply the chosen identity.
///
/// With no `selector` (batch/hook mode) an ambiguous resolution is reported
/// as [`PassOutcome::Skipped`] and the configuration is left untouched.
pub fn resolve_workspace(
    workspace: &Workspace,
    catalog: &Catalog,
    selector: Option<&dyn Selector>,
) -> Result<PassOutcome> {
    let config_file = gitconfig::config_file(&workspace.git_dir);
    let remotes: BTreeMap<String, RemoteDescriptor> = gitconfig::load_remotes(&config_file)?
        .iter()
        .map(|(name, url)| (name.clone(), RemoteDescriptor::new(name, url)))
        .collect();

    let resolution = policy::resolve(&remotes, catalog);
    let key = match resolution.outcome {
        ResolutionOutcome::NoRemotes => catalog.local()?.key().to_string(),
        ResolutionOutcome::UseIdentity(key) => key,
        ResolutionOutcome::Ambiguous(candidates) => match selector {
            None => return Ok(PassOutcome::Skipped { candidates }),
            Some(selector) => {
                let default = policy::preferred_candidate(&resolution.matches)
                    .and_then(|preferred| candidates.iter().position(|c| c == preferred));
                let prompt = format!("Select commit identity for {}", workspace.display_path);
                match selector
                    .select(&prompt, &candidates, default)?
                    .and_then(|index| candidates.get(index).cloned())
                {
                    Some(key) => key,
                    None => return Ok(PassOutcome::Skipped { candidates }),
                }
            }
        },
    };

    // Keys handed out by the policy originate from this same immutable
    // catalog, so the lookup only fails if a caller fabricated a key.
    let record = catalog.get(&key).ok_or_else(|| Error::IdentityFile {
        key: key.clone(),
        path: catalog.root().join(&key),
        message: "identity key not present in catalog".to_string(),
    })?;
    let identity = record.load()?;
    gitconfig::apply_identity(&config_file, &identity)?;
    Ok(PassOutcome::Applied { key })
}

/// Parse `[submodule "<name>"]` sections with a `path` key.
fn parse_gitmodules(path: &Path) -> Result<Vec<SubmoduleEntry>> {
    let content = std::fs::read_to_string(path)?;
    let ini = Ini::load_from_str_opt(&content, gitconfig::git_ini_options())?;

    let mut entries = Vec::new();
    for (section, properties) in ini.iter() {
        let Some(section) = section else { continue };
        let Some(name) = section
            .strip_prefix("submodule \"")
            .and_then(|rest| rest.strip_suffix('"'))
        else {
            continue;
        };
        if let Some(sub_path) = properties.get("path") {
            entries.push(SubmoduleEntry {
                name: name.to_string(),
                path: sub_path.to_string(),
            });
        }
    }

    Ok(entries)
}
