use gl_core::Environment;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Flags that let an unsigned script run without touching the user profile.
pub const POWERSHELL_ARGS: [&str; 4] = ["-ExecutionPolicy", "Bypass", "-NoProfile", "-File"];

/// The program that executes the extracted script.
/// The script path is always appended after `leading_args`.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpreter {
    pub program: PathBuf,
    pub leading_args: Vec<OsString>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::powershell(default_program())
    }
}

impl Interpreter {
    pub fn powershell(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: POWERSHELL_ARGS.iter().map(OsString::from).collect(),
        }
    }

    /// Any other interpreter, e.g. `sh` for exercising the runner.
    pub fn custom<I, S>(program: impl Into<PathBuf>, leading_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            leading_args: leading_args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn args_for(&self, script: &Path) -> Vec<OsString> {
        let mut args = self.leading_args.clone();
        args.push(script.as_os_str().to_owned());
        args
    }

    pub fn name(&self) -> String {
        self.program.display().to_string()
    }
}

#[cfg(windows)]
fn default_program() -> &'static str {
    "powershell.exe"
}

#[cfg(not(windows))]
fn default_program() -> &'static str {
    "pwsh"
}

/// One invocation of the governance script.
#[derive(Debug, Clone)]
pub struct RunJob {
    pub interpreter: Interpreter,
    pub script_path: PathBuf,
    pub working_dir: PathBuf,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    Failure(i32),
}

impl ExitOutcome {
    /// Killed-by-signal has no code; it counts as `-1`.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Success,
            Some(code) => Self::Failure(code),
            None => Self::Failure(-1),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunnerStatus {
    Starting(Environment),
    Running(u32), // PID
    Stdout(String),
    Stderr(String),
    Exited(ExitOutcome),
}
