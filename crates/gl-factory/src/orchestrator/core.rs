use super::async_handler::{run_async, PreparedRun};
use super::types::{Notice, RunEvent, ShutdownDecision};
use crate::config::LauncherConfig;
use crate::console::{LogBook, LogSink};
use crate::error::{LaunchError, Result};
use crate::extractor::Bundle;
use crate::opener::open_artifact;
use crate::runner::{ProcessSlot, RunJob};
use gl_core::{resolve_environment, Environment, RunState};
use std::{
    collections::VecDeque,
    sync::{
        mpsc::{channel, Receiver, RecvTimeoutError, Sender},
        Arc,
    },
    thread::JoinHandle,
    time::Duration,
};

const WAIT_TICK: Duration = Duration::from_millis(100);

/// Owns the run state machine and everything the front end renders.
///
/// ```text
/// Idle ─start─▶ Preparing ─▶ Executing ─▶ Succeeded
///                   │            │
///                   └────────────┴──────▶ Failed
/// ```
///
/// Controls are derived from the state, so they come back on every way out of
/// a run. Lives on the presentation thread; the background sequence only talks
/// to it through channels.
pub struct Orchestrator {
    config: LauncherConfig,
    bundle: Arc<Bundle>,
    state: RunState,
    environment: Option<Environment>,
    open_enabled: bool,
    log: LogBook,
    process: ProcessSlot,
    events_tx: Sender<RunEvent>,
    events_rx: Receiver<RunEvent>,
    notices: VecDeque<Notice>,
    worker: Option<JoinHandle<()>>,
}

impl Orchestrator {
    pub fn new(config: LauncherConfig, bundle: Bundle) -> Self {
        let (events_tx, events_rx) = channel();
        Self {
            config,
            bundle: Arc::new(bundle),
            state: RunState::Idle,
            environment: None,
            open_enabled: false,
            log: LogBook::default(),
            process: ProcessSlot::new(),
            events_tx,
            events_rx,
            notices: VecDeque::new(),
            worker: None,
        }
    }

    // --- QUERIES ---

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Start button and environment picker.
    pub fn controls_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn progress_visible(&self) -> bool {
        self.is_busy()
    }

    pub fn open_enabled(&self) -> bool {
        self.open_enabled && !self.is_busy()
    }

    pub fn status(&self) -> &str {
        self.log.status()
    }

    pub fn log(&self) -> &LogBook {
        &self.log
    }

    pub fn sink(&self) -> LogSink {
        self.log.sink()
    }

    /// Environment of the current or most recent run.
    pub fn environment(&self) -> Option<Environment> {
        self.environment
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    // --- COMMANDS ---

    /// Begins a run for the picker entry at `selection_index`.
    ///
    /// Rejected with `AlreadyRunning` (and a notice) while a run is in flight;
    /// the running one is not touched.
    pub fn start(&mut self, selection_index: usize) -> Result<()> {
        if !self.state.can_start() {
            tracing::warn!(state = ?self.state, "start rejected, run in progress");
            self.notices.push_back(Notice::AlreadyRunning);
            return Err(LaunchError::AlreadyRunning);
        }
        self.reap_worker();

        let environment = resolve_environment(selection_index);
        self.environment = Some(environment);
        self.open_enabled = false;
        self.log.clear();
        self.log.set_status("Preparing workspace...");
        self.transition(RunState::Preparing);

        let run = PreparedRun {
            bundle: Arc::clone(&self.bundle),
            job: RunJob {
                interpreter: self.config.interpreter.clone(),
                script_path: self.config.script_path(),
                working_dir: self.config.base_dir.clone(),
                environment,
            },
        };

        match run_async(
            run,
            self.process.clone(),
            self.log.sink(),
            self.events_tx.clone(),
        ) {
            Ok(handle) => {
                self.worker = Some(handle);
                Ok(())
            }
            Err(e) => {
                let err = LaunchError::from(e);
                self.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Applies everything the background has sent so far. Never blocks.
    /// Returns whether anything visible changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = self.log.pump() > 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            changed = true;
        }

        // A worker that died without reporting must not leave us busy forever.
        if self.is_busy() && self.worker.as_ref().is_some_and(JoinHandle::is_finished) {
            while let Ok(event) = self.events_rx.try_recv() {
                self.apply(event);
            }
            if self.is_busy() {
                self.reap_worker();
                self.fail("The run stopped unexpectedly.".into());
            }
            changed = true;
        }
        changed
    }

    /// Like [`poll`](Self::poll), but waits up to `timeout` for the next event.
    pub fn tick(&mut self, timeout: Duration) -> bool {
        let changed = match self.events_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply(event);
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        };
        self.poll() || changed
    }

    /// Blocks until the current run reaches a terminal state.
    pub fn wait(&mut self) -> RunState {
        while self.is_busy() {
            self.tick(WAIT_TICK);
        }
        self.log.pump();
        self.state
    }

    /// Opens the produced model. Problems become notices for the operator.
    pub fn open_result(&mut self) -> Result<()> {
        let model = self.config.template_path();
        match open_artifact(&model) {
            Ok(()) => {
                self.log.sink().success("✓ Opening Power BI Governance Model...");
                self.log.pump();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not open model");
                let notice = match &e {
                    LaunchError::NotFound(_) => Notice::ModelNotFound,
                    other => Notice::OpenFailed(other.to_string()),
                };
                self.notices.push_back(notice);
                Err(e)
            }
        }
    }

    /// Whether the window may close right away.
    pub fn request_close(&self) -> ShutdownDecision {
        if self.is_busy() {
            ShutdownDecision::NeedsConfirmation
        } else {
            ShutdownDecision::Proceed
        }
    }

    /// Confirmed exit while running: kill the script, never block on it.
    pub fn force_shutdown(&mut self) {
        match self.process.terminate() {
            Ok(true) => tracing::info!("script process terminated for shutdown"),
            Ok(false) => tracing::debug!("no live script process at shutdown"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to terminate script process");
                self.log.sink().error(format!("Error killing process: {e}"));
                self.log.pump();
            }
        }
    }

    // --- INTERNALS ---

    fn apply(&mut self, event: RunEvent) {
        match event {
            RunEvent::Phase(next) => {
                if self.is_busy() {
                    self.transition(next);
                }
            }
            RunEvent::Finished(Ok(())) => {
                self.log.pump();
                self.log.set_status("Process completed successfully!");
                self.open_enabled = true;
                self.transition(RunState::Succeeded);
                self.notices.push_back(Notice::Completed);
                self.reap_worker();
            }
            RunEvent::Finished(Err(e)) => {
                self.fail(e.to_string());
                self.reap_worker();
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.log.pump();
        self.log.sink().error(format!("ERROR: {message}"));
        self.log.pump();
        self.log.set_status("Error occurred");
        self.transition(RunState::Failed);
        self.notices.push_back(Notice::Failed(message));
    }

    fn transition(&mut self, next: RunState) {
        tracing::info!(from = ?self.state, to = ?next, "run state changed");
        self.state = next;
    }

    fn reap_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                tracing::error!("governance run thread panicked");
            }
        }
    }
}
