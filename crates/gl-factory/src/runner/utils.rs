use super::types::{Interpreter, RunJob};
use crate::error::{LaunchError, Result};
use gl_core::Environment;
use std::{
    io::{self, BufRead, BufReader, Read},
    path::PathBuf,
    process::{Command, Stdio},
    thread::{self, JoinHandle},
};

/// What the script receives on stdin: its own default is accepted with an
/// empty line, anything else is named explicitly.
pub fn stdin_line(environment: Environment) -> &'static str {
    if environment.is_default() {
        ""
    } else {
        environment.identifier()
    }
}

/// Resolves the interpreter on `PATH` so a missing one fails before spawn.
pub fn check_interpreter(interpreter: &Interpreter) -> Result<PathBuf> {
    which::which(&interpreter.program).map_err(|e| LaunchError::ProcessStart {
        program: interpreter.name(),
        reason: e.to_string(),
    })
}

pub fn build_command(job: &RunJob) -> Command {
    let mut cmd = Command::new(&job.interpreter.program);
    cmd.args(job.interpreter.args_for(&job.script_path))
        .current_dir(&job.working_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    hide_console_window(&mut cmd);
    cmd
}

#[cfg(windows)]
fn hide_console_window(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x08000000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_console_window(_cmd: &mut Command) {}

/// Reads `reader` until EOF, handing every non-empty line to `on_line`.
/// A line ends at `\n` or at a lone `\r`, so carriage-return progress output
/// arrives one update at a time. Invalid UTF-8 is replaced rather than ending
/// the drain.
pub fn drain_lines<R, F>(reader: R, mut on_line: F) -> io::Result<()>
where
    R: Read,
    F: FnMut(String),
{
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    let mut emit = |line: &mut Vec<u8>| {
        if !line.is_empty() {
            on_line(String::from_utf8_lossy(line).into_owned());
            line.clear();
        }
    };

    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if chunk.is_empty() {
            emit(&mut line);
            return Ok(());
        }

        for &byte in chunk {
            match byte {
                b'\n' | b'\r' => emit(&mut line),
                _ => line.push(byte),
            }
        }
        let consumed = chunk.len();
        reader.consume(consumed);
    }
}

/// Drains `reader` on its own thread.
pub fn spawn_drain<R, F>(name: &str, reader: R, on_line: F) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
    F: FnMut(String) + Send + 'static,
{
    let stream = name.to_string();
    thread::Builder::new()
        .name(format!("drain-{name}"))
        .spawn(move || {
            if let Err(e) = drain_lines(reader, on_line) {
                tracing::warn!(stream = %stream, error = %e, "output drain stopped early");
            }
        })
}
