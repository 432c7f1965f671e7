#![cfg(unix)]

use gl_core::Environment;
use gl_factory::runner::{process_runner, ExitOutcome, Interpreter, ProcessSlot, RunJob, RunnerStatus};
use gl_factory::LaunchError;
use std::{
    fs,
    path::Path,
    sync::{Arc, Mutex},
};

mod common;

fn job(dir: &Path, script: &str, environment: Environment) -> RunJob {
    let script_path = dir.join("Final PS Script.txt");
    fs::write(&script_path, script).unwrap();
    RunJob {
        interpreter: Interpreter::custom("sh", Vec::<String>::new()),
        script_path,
        working_dir: dir.to_path_buf(),
        environment,
    }
}

fn run_collecting(job: &RunJob) -> (Result<ExitOutcome, LaunchError>, Vec<RunnerStatus>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let result = process_runner(job, &ProcessSlot::new(), move |status| {
        sink.lock().unwrap().push(status)
    });
    let events = events.lock().unwrap().clone();
    (result, events)
}

#[test]
fn exit_code_decides_the_outcome() {
    let dir = tempfile::tempdir().unwrap();
    for code in [0, 1, 2, 42, 127, 255] {
        let job = job(dir.path(), &format!("exit {code}"), Environment::Public);
        let (result, events) = run_collecting(&job);

        let expected = if code == 0 {
            ExitOutcome::Success
        } else {
            ExitOutcome::Failure(code)
        };
        assert_eq!(result.unwrap(), expected, "exit {code}");
        assert_eq!(events.last(), Some(&RunnerStatus::Exited(expected)));
    }
}

#[test]
fn signal_death_counts_as_failure() {
    assert_eq!(ExitOutcome::from_code(None), ExitOutcome::Failure(-1));
    assert_eq!(
        ExitOutcome::from_code(Some(-1073741819)),
        ExitOutcome::Failure(-1073741819)
    );
}

#[test]
fn interleaved_streams_arrive_once_each_in_stream_order() {
    let dir = tempfile::tempdir().unwrap();
    let script = r#"
i=1
while [ $i -le 50 ]; do
  echo "out-$i"
  echo "err-$i" >&2
  i=$((i + 1))
done
"#;
    let (result, events) = run_collecting(&job(dir.path(), script, Environment::Public));
    assert!(result.unwrap().is_success());

    let stdout: Vec<String> = events
        .iter()
        .filter_map(|e| match e {
            RunnerStatus::Stdout(l) => Some(l.clone()),
            _ => None,
        })
        .collect();
    let stderr: Vec<String> = events
        .iter()
        .filter_map(|e| match e {
            RunnerStatus::Stderr(l) => Some(l.clone()),
            _ => None,
        })
        .collect();

    let expected_out: Vec<String> = (1..=50).map(|i| format!("out-{i}")).collect();
    let expected_err: Vec<String> = (1..=50).map(|i| format!("err-{i}")).collect();
    assert_eq!(stdout, expected_out);
    assert_eq!(stderr, expected_err);
}

#[test]
fn non_default_environment_is_sent_as_exactly_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let (result, events) = run_collecting(&job(dir.path(), common::ECHO_ONE_LINE, Environment::UsGovHigh));

    assert_eq!(result.unwrap(), ExitOutcome::Success);
    assert!(events.contains(&RunnerStatus::Stdout("got:[USGovHigh]".into())));
}

#[test]
fn default_environment_is_sent_as_an_empty_line() {
    let dir = tempfile::tempdir().unwrap();
    let (result, events) = run_collecting(&job(dir.path(), common::ECHO_ONE_LINE, Environment::Public));

    assert_eq!(result.unwrap(), ExitOutcome::Success);
    assert!(events.contains(&RunnerStatus::Stdout("got:[]".into())));
    assert!(!events.iter().any(|e| matches!(e, RunnerStatus::Stderr(_))));
}

#[test]
fn script_runs_inside_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("Config")).unwrap();
    let (result, events) = run_collecting(&job(
        dir.path(),
        "[ -d Config ] && echo found-config",
        Environment::Public,
    ));

    assert!(result.unwrap().is_success());
    assert!(events.contains(&RunnerStatus::Stdout("found-config".into())));
}

#[test]
fn missing_interpreter_is_a_start_error_not_an_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut job = job(dir.path(), "exit 0", Environment::Public);
    job.interpreter = Interpreter::powershell("no-such-interpreter-for-tests");

    let (result, events) = run_collecting(&job);

    assert!(matches!(result, Err(LaunchError::ProcessStart { .. })));
    assert!(!events.iter().any(|e| matches!(e, RunnerStatus::Exited(_))));
}

#[test]
fn slot_is_empty_after_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let slot = ProcessSlot::new();

    process_runner(&job(dir.path(), "exit 0", Environment::Public), &slot, |_| {}).unwrap();

    assert!(!slot.is_occupied());
}
