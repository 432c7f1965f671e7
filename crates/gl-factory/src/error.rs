use std::{io, path::PathBuf};

pub type Result<T, E = LaunchError> = std::result::Result<T, E>;

/// Everything that can go wrong between pressing start and opening the model.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    // --- MATERIALIZATION ---
    #[error("Could not find embedded resource: {0}")]
    MissingPayload(String),

    #[error("Refusing to extract outside the workspace: {0:?}")]
    InvalidPayloadPath(PathBuf),

    #[error("Failed to write {path:?}: {source}")]
    Materialize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // --- PROCESS ---
    #[error("Failed to start '{program}': {reason}")]
    ProcessStart { program: String, reason: String },

    #[error("PowerShell script exited with code {code}")]
    ProcessExit { code: i32 },

    // --- RESULT ---
    #[error("Power BI Governance Model file not found.\n\nPlease run the process first.")]
    NotFound(PathBuf),

    #[error("Error opening model:\n\n{source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // --- ORCHESTRATION ---
    #[error("A process is already running. Please wait for it to complete.")]
    AlreadyRunning,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LaunchError {
    pub(crate) fn materialize(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Materialize { path, source }
    }

    pub fn is_materialization(&self) -> bool {
        matches!(
            self,
            Self::MissingPayload(_) | Self::InvalidPayloadPath(_) | Self::Materialize { .. }
        )
    }
}
