//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which shows the identities
//! the catalog scan finds: key, resolved name/email, and the backing file.
//! Records that fail to load are reported inline instead of aborting the
//! listing.

use anyhow::Result;
use clap::Args;

use git_persona::catalog::Catalog;
use git_persona::defaults;
use git_persona::output::{self, OutputConfig};

/// List the identities in the catalog
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show only the identity keys
    #[arg(long)]
    pub keys_only: bool,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs, out: &OutputConfig) -> Result<()> {
    let catalog_root = defaults::catalog_root();
    let catalog = Catalog::scan(&catalog_root)?;

    if catalog.is_empty() {
        println!(
            "No identities found under {}",
            catalog.root().display()
        );
        return Ok(());
    }

    for record in catalog.records() {
        if args.keys_only {
            println!("{}", record.key());
            continue;
        }

        match record.load() {
            Ok(identity) => println!(
                "{}  {} <{}>  ({})",
                output::emphasize(out, record.key()),
                identity.name,
                identity.email,
                record.path().display()
            ),
            Err(e) => println!(
                "{}  {}",
                output::emphasize(out, record.key()),
                output::warning(out, &format!("unreadable: {e}"))
            ),
        }
    }

    Ok(())
}
