use super::handle::ProcessSlot;
use super::types::{ExitOutcome, RunJob, RunnerStatus};
use super::utils::{build_command, check_interpreter, spawn_drain, stdin_line};
use crate::error::{LaunchError, Result};
use std::io::Write;

/// Runs the script once and reports how it exited.
///
/// Output lines reach `callback` live from two drain threads, so stdout and
/// stderr interleave in arrival order. `Exited` is only reported after both
/// drains have finished, so no line can trail it.
pub fn process_runner<F>(job: &RunJob, slot: &ProcessSlot, callback: F) -> Result<ExitOutcome>
where
    F: Fn(RunnerStatus) + Send + Clone + 'static,
{
    callback(RunnerStatus::Starting(job.environment));

    // 1. Spawn
    check_interpreter(&job.interpreter)?;
    let mut child = build_command(job)
        .spawn()
        .map_err(|e| LaunchError::ProcessStart {
            program: job.interpreter.name(),
            reason: e.to_string(),
        })?;

    let pid = child.id();
    let stdin = child.stdin.take();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    if let Err(mut orphan) = slot.install(child) {
        let _ = orphan.kill();
        let _ = orphan.wait();
        return Err(LaunchError::AlreadyRunning);
    }
    tracing::info!(pid, environment = %job.environment, "script process started");
    callback(RunnerStatus::Running(pid));

    // 2. Prime stdin with exactly one line, then close it.
    if let Some(mut stdin) = stdin {
        let line = stdin_line(job.environment);
        if let Err(e) = writeln!(stdin, "{line}").and_then(|_| stdin.flush()) {
            // The exit code still decides the outcome.
            tracing::warn!(pid, error = %e, "could not hand environment to script");
        }
    }

    // 3. Drain both streams concurrently.
    let mut drains = Vec::with_capacity(2);
    if let Some(out) = stdout {
        let cb = callback.clone();
        drains.push(spawn_drain("stdout", out, move |line| {
            cb(RunnerStatus::Stdout(line))
        }));
    }
    if let Some(err) = stderr {
        let cb = callback.clone();
        drains.push(spawn_drain("stderr", err, move |line| {
            cb(RunnerStatus::Stderr(line))
        }));
    }

    // 4. Block until exit.
    let waited = slot.wait();
    for drain in drains {
        match drain {
            Ok(handle) => {
                let _ = handle.join();
            }
            Err(e) => tracing::warn!(pid, error = %e, "could not start output drain"),
        }
    }
    let status = waited?;

    // 5. Decide.
    let outcome = ExitOutcome::from_code(status.code());
    tracing::info!(pid, ?outcome, "script process exited");
    callback(RunnerStatus::Exited(outcome));
    Ok(outcome)
}
