use super::{core::materialize, types::Bundle, utils::status_line};
use crate::config::LauncherConfig;
use anyhow::{Context, Result};

/// Unpacks the workspace without running anything.
pub fn run_cli(config: &LauncherConfig) -> Result<()> {
    let bundle = Bundle::embedded();
    let base = config.base_dir();

    println!("📂 Workspace: {:?}", base);

    materialize(&bundle, base, |status| {
        println!("   {}", status_line(&status));
    })
    .with_context(|| format!("Failed to prepare workspace at {:?}", base))?;

    println!("✨ Workspace ready.");
    Ok(())
}
