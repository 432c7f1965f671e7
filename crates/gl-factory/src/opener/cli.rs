use super::core::open_artifact;
use crate::{config::LauncherConfig, error::LaunchError};
use anyhow::Result;

pub fn run_cli(config: &LauncherConfig) -> Result<()> {
    let model = config.template_path();

    match open_artifact(&model) {
        Ok(()) => {
            println!("✓ Opening Power BI Governance Model...");
            Ok(())
        }
        // Reported, not escalated.
        Err(LaunchError::NotFound(_)) => {
            eprintln!("⚠️ Power BI Governance Model file not found at {:?}.", model);
            eprintln!("   Run `gl-cli run` first.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
