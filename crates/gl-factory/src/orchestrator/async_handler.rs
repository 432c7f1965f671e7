use super::types::RunEvent;
use crate::console::LogSink;
use crate::error::{LaunchError, Result};
use crate::extractor::{materialize, status_line, Bundle};
use crate::runner::{process_runner, ExitOutcome, ProcessSlot, RunJob, RunnerStatus};
use gl_core::RunState;
use std::{
    io,
    sync::{mpsc::Sender, Arc},
    thread::{self, JoinHandle},
};

/// Inputs for one materialize-then-run sequence.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub bundle: Arc<Bundle>,
    pub job: RunJob,
}

/// Runs the whole sequence off the UI thread. The outcome always arrives as a
/// final `RunEvent::Finished`, whatever happened in between.
pub fn run_async(
    run: PreparedRun,
    slot: ProcessSlot,
    log: LogSink,
    sender: Sender<RunEvent>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("governance-run".into())
        .spawn(move || {
            let result = run_sequence(&run, &slot, &log, &sender);
            if let Err(e) = &result {
                tracing::error!(error = %e, "governance run failed");
            }
            let _ = sender.send(RunEvent::Finished(result));
        })
}

fn run_sequence(
    run: &PreparedRun,
    slot: &ProcessSlot,
    log: &LogSink,
    sender: &Sender<RunEvent>,
) -> Result<()> {
    // 1. Preparing
    log.status("Preparing workspace...");
    materialize(&run.bundle, &run.job.working_dir, |status| {
        log.success(status_line(&status))
    })?;

    // 2. Executing
    log.status("Starting Power BI Governance process...");
    let _ = sender.send(RunEvent::Phase(RunState::Executing));

    let cb_log = log.clone();
    let outcome = process_runner(&run.job, slot, move |status| forward(&cb_log, status))?;

    match outcome {
        ExitOutcome::Success => Ok(()),
        ExitOutcome::Failure(code) => Err(LaunchError::ProcessExit { code }),
    }
}

fn forward(log: &LogSink, status: RunnerStatus) {
    match status {
        RunnerStatus::Starting(env) => {
            log.info(format!("Starting PowerShell process with environment: {env}"))
        }
        RunnerStatus::Running(pid) => tracing::debug!(pid, "script running"),
        RunnerStatus::Stdout(line) => log.info(line),
        RunnerStatus::Stderr(line) => log.error(format!("ERROR: {line}")),
        RunnerStatus::Exited(ExitOutcome::Success) => {
            log.success("✓ PowerShell process completed successfully")
        }
        // The orchestrator reports failures once, with the code.
        RunnerStatus::Exited(ExitOutcome::Failure(_)) => {}
    }
}
