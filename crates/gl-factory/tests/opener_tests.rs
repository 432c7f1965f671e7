#![cfg(all(unix, not(target_os = "macos")))]

use gl_factory::config::TEMPLATE_FILE;
use gl_factory::opener::open_artifact;
use gl_factory::orchestrator::{Notice, Orchestrator};
use gl_factory::LaunchError;
use std::{env, fs, os::unix::fs::PermissionsExt, path::Path};

mod common;
use common::{sh_bundle, sh_config};

fn install_handler(bin: &Path, body: &str) {
    let handler = bin.join("xdg-open");
    fs::write(&handler, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&handler, fs::Permissions::from_mode(0o755)).unwrap();
}

// One test owns PATH for this binary, so the cases run in sequence.
#[test]
fn handler_exit_status_decides_whether_the_model_opened() {
    let bin = tempfile::tempdir().unwrap();
    let base = tempfile::tempdir().unwrap();
    let model = base.path().join(TEMPLATE_FILE);
    fs::write(&model, b"PBIT").unwrap();

    let path = env::var_os("PATH").unwrap_or_default();
    let mut dirs = vec![bin.path().to_path_buf()];
    dirs.extend(env::split_paths(&path));
    env::set_var("PATH", env::join_paths(dirs).unwrap());

    // Handler refuses the file.
    install_handler(bin.path(), "exit 3");
    let err = open_artifact(&model).unwrap_err();
    assert!(matches!(err, LaunchError::Open { ref path, .. } if path == &model));
    assert!(err.to_string().starts_with("Error opening model:"));

    let mut orch = Orchestrator::new(sh_config(base.path()), sh_bundle("exit 0"));
    assert!(matches!(orch.open_result(), Err(LaunchError::Open { .. })));
    assert!(matches!(orch.take_notice(), Some(Notice::OpenFailed(msg)) if msg.contains("exited")));
    assert!(!orch.log().contains_line("✓ Opening Power BI Governance Model..."));

    // Handler accepts it.
    install_handler(bin.path(), "exit 0");
    open_artifact(&model).unwrap();
    orch.open_result().unwrap();
    assert!(orch.log().contains_line("✓ Opening Power BI Governance Model..."));
    assert_eq!(orch.take_notice(), None);
}
