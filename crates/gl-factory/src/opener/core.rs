use crate::error::{LaunchError, Result};
use std::{
    io,
    path::Path,
    process::{Command, Stdio},
};

/// Hands `path` to the platform's default document handler.
pub fn open_artifact(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(LaunchError::NotFound(path.to_path_buf()));
    }

    launch_default_handler(path).map_err(|source| LaunchError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "opened with default handler");
    Ok(())
}

/// Waits for the handler itself, which returns as soon as the document is
/// handed off. A nonzero status means nothing could open it.
fn launch_default_handler(path: &Path) -> io::Result<()> {
    let mut cmd = handler_command(path);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let status = cmd.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("handler exited with {status}")))
    }
}

#[cfg(windows)]
fn handler_command(path: &Path) -> Command {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x08000000;
    let mut cmd = Command::new("cmd");
    // Empty title so a quoted path is not taken as the window title.
    cmd.args(["/C", "start", ""]).arg(path);
    cmd.creation_flags(CREATE_NO_WINDOW);
    cmd
}

#[cfg(target_os = "macos")]
fn handler_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(windows, target_os = "macos")))]
fn handler_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Power BI Governance Model.pbit");

        let err = open_artifact(&path).unwrap_err();

        assert!(matches!(err, LaunchError::NotFound(ref p) if p == &path));
        assert!(err.to_string().contains("Please run the process first."));
    }

    #[test]
    fn a_directory_is_not_an_artifact() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open_artifact(dir.path()),
            Err(LaunchError::NotFound(_))
        ));
    }
}
