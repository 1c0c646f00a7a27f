use std::process::Command;

use anyhow::{Context, Result};

const PACKAGES: &[&str] = &["novitus-domain", "novitus-core", "novitus-infra"];

/// Check that every library crate compiles on its own, without features
/// unified in from the rest of the workspace.
pub fn check_packages() -> Result<()> {
    println!("Checking {} packages in isolation...", PACKAGES.len());

    for (index, package) in PACKAGES.iter().enumerate() {
        println!("\n[{}/{}] cargo check -p {package} --all-targets", index + 1, PACKAGES.len());

        let status = Command::new("cargo")
            .args(["check", "-p", package, "--all-targets"])
            .status()
            .with_context(|| format!("Failed to run cargo check for '{package}'"))?;

        if !status.success() {
            anyhow::bail!("Package '{package}' failed to compile");
        }

        println!("✅ {package} compiled successfully");
    }

    Ok(())
}
