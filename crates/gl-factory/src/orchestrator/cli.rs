use super::{core::Orchestrator, types::RunArgs};
use crate::{config::LauncherConfig, extractor::Bundle};
use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Select};
use gl_core::{Environment, RunState, Severity};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn run_cli(config: LauncherConfig, args: RunArgs) -> Result<()> {
    // 1. Select Environment
    let environment = match args.environment {
        Some(env) => env,
        None => {
            let labels: Vec<&str> = Environment::ALL.iter().map(|e| e.label()).collect();
            let idx = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Power BI Environment")
                .default(Environment::DEFAULT.index())
                .items(&labels)
                .interact()?;
            Environment::from_index(idx)
        }
    };

    println!("📂 Workspace: {:?}", config.base_dir());
    println!("🌐 Environment: {}", environment.label());
    println!();

    // 2. Start
    let mut orchestrator = Orchestrator::new(config, Bundle::embedded());
    orchestrator.start(environment.index())?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")?
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    // 3. Stream the log until the run settles
    let mut printed = 0;
    loop {
        orchestrator.tick(Duration::from_millis(100));
        pb.set_message(orchestrator.status().to_string());

        for entry in &orchestrator.log().entries()[printed..] {
            let marker = match entry.severity {
                Severity::Error => "❌",
                Severity::Success => "✅",
                Severity::Info => "  ",
            };
            pb.println(format!("{} {} {}", entry.stamp(), marker, entry.text));
        }
        printed = orchestrator.log().len();

        if !orchestrator.is_busy() {
            break;
        }
    }
    pb.finish_and_clear();

    // 4. Report
    match orchestrator.state() {
        RunState::Succeeded => {
            println!();
            println!("✨ Power BI Governance process completed successfully!");
            println!("   Open the model with `gl-cli open`.");
            Ok(())
        }
        _ => match orchestrator.take_notice() {
            Some(notice) => bail!("{}", notice.message()),
            None => bail!("Run ended in state {:?}", orchestrator.state()),
        },
    }
}
