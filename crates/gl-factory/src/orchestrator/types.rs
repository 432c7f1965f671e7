use crate::error::LaunchError;
use gl_core::{Environment, RunState};

/// Background sequence → orchestrator.
#[derive(Debug)]
pub enum RunEvent {
    Phase(RunState),
    Finished(Result<(), LaunchError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A modal message the front end owes the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AlreadyRunning,
    Completed,
    Failed(String),
    ModelNotFound,
    OpenFailed(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::AlreadyRunning => "Already Running",
            Notice::Completed => "Success",
            Notice::Failed(_) | Notice::OpenFailed(_) => "Error",
            Notice::ModelNotFound => "File Not Found",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::AlreadyRunning => {
                "A process is already running. Please wait for it to complete.".into()
            }
            Notice::Completed => "Power BI Governance process completed successfully!\n\n\
                 You can now open the Power BI Governance Model to view the results."
                .into(),
            Notice::Failed(reason) => format!("An error occurred:\n\n{reason}"),
            Notice::ModelNotFound => {
                "Power BI Governance Model file not found.\n\nPlease run the process first."
                    .into()
            }
            Notice::OpenFailed(reason) => reason.clone(),
        }
    }

    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::AlreadyRunning | Notice::Completed => NoticeLevel::Info,
            Notice::ModelNotFound => NoticeLevel::Warning,
            Notice::Failed(_) | Notice::OpenFailed(_) => NoticeLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownDecision {
    Proceed,
    NeedsConfirmation,
}

pub struct RunArgs {
    pub environment: Option<Environment>,
}
