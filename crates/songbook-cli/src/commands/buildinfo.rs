use anyhow::{bail, Context, Result};
use songbook_core::buildinfo;
use std::process::Command;

/// Print a LaTeX `\date` with the current date and repository state.
pub fn make_buildinfo() -> Result<()> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev"])
        .output()
        .context("Failed to run git")?;

    if !output.status.success() {
        bail!(
            "git describe failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let revision = String::from_utf8(output.stdout)
        .context("git describe printed invalid UTF-8")?;
    log::debug!("Repository revision: {}", revision.trim());

    println!("{}", buildinfo::date_command(&revision));
    Ok(())
}
