use super::types::{Bundle, ExtractStatus, Payload};
use crate::config::{CONFIG_DIR, SCRIPT_FILE, TEMPLATE_FILE};
use crate::error::{LaunchError, Result};
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

/// Unpacks the bundle into `destination`, overwriting whatever is there.
///
/// Not transactional: on error, files written so far stay on disk.
pub fn materialize<F>(bundle: &Bundle, destination: &Path, callback: F) -> Result<()>
where
    F: Fn(ExtractStatus),
{
    // 1. Folders
    if !destination.is_dir() {
        fs::create_dir_all(destination).map_err(LaunchError::materialize(destination))?;
        callback(ExtractStatus::CreatedBaseFolder(destination.to_path_buf()));
    }

    let config_dir = destination.join(CONFIG_DIR);
    fs::create_dir_all(&config_dir).map_err(LaunchError::materialize(&config_dir))?;

    // 2. Script
    let script = bundle
        .script
        .as_deref()
        .ok_or_else(|| LaunchError::MissingPayload(SCRIPT_FILE.into()))?;
    let script_path = destination.join(SCRIPT_FILE);
    write_payload(&script_path, script)?;
    callback(ExtractStatus::ScriptWritten(script_path));

    // 3. Template
    let template = bundle
        .template
        .as_deref()
        .ok_or_else(|| LaunchError::MissingPayload(TEMPLATE_FILE.into()))?;
    let template_path = destination.join(TEMPLATE_FILE);
    write_payload(&template_path, template)?;
    callback(ExtractStatus::TemplateWritten(template_path));

    // 4. Config tree
    for payload in &bundle.config {
        let target = config_target(&config_dir, payload)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(LaunchError::materialize(parent))?;
        }
        write_payload(&target, &payload.bytes)?;
    }
    callback(ExtractStatus::ConfigWritten {
        count: bundle.config.len(),
    });

    tracing::debug!(destination = %destination.display(), "workspace materialized");
    Ok(())
}

fn write_payload(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(LaunchError::materialize(path))
}

/// Rejects absolute paths and `..` so a payload can never escape `Config/`.
fn config_target(config_dir: &Path, payload: &Payload) -> Result<PathBuf> {
    let rel = &payload.relative_path;
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if escapes || rel.as_os_str().is_empty() {
        return Err(LaunchError::InvalidPayloadPath(rel.clone()));
    }
    Ok(config_dir.join(rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn sample_bundle() -> Bundle {
        Bundle::new(
            b"Write-Output 'hi'".as_slice(),
            b"PBIT".as_slice(),
            vec![
                Payload::new("Config.json", b"{}".as_slice()),
                Payload::new("Rules/Deep/rule.txt", b"rule".as_slice()),
            ],
        )
    }

    #[test]
    fn reports_each_category_and_nested_config() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("Power BI Backups");
        let seen = RefCell::new(Vec::new());

        materialize(&sample_bundle(), &base, |s| seen.borrow_mut().push(s)).unwrap();

        let seen = seen.into_inner();
        assert_eq!(seen[0], ExtractStatus::CreatedBaseFolder(base.clone()));
        assert!(seen.contains(&ExtractStatus::ConfigWritten { count: 2 }));
        assert_eq!(
            fs::read(base.join("Config/Rules/Deep/rule.txt")).unwrap(),
            b"rule"
        );
    }

    #[test]
    fn existing_base_folder_is_not_reported_as_created() {
        let dir = tempfile::tempdir().unwrap();
        let seen = RefCell::new(Vec::new());

        materialize(&sample_bundle(), dir.path(), |s| seen.borrow_mut().push(s)).unwrap();

        assert!(!seen
            .borrow()
            .iter()
            .any(|s| matches!(s, ExtractStatus::CreatedBaseFolder(_))));
    }

    #[test]
    fn missing_template_fails_after_script_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut bundle = sample_bundle();
        bundle.template = None;

        let err = materialize(&bundle, dir.path(), |_| {}).unwrap_err();

        assert!(matches!(err, LaunchError::MissingPayload(ref name) if name == TEMPLATE_FILE));
        assert!(err.is_materialization());
        assert!(dir.path().join(SCRIPT_FILE).exists());
    }

    #[test]
    fn escaping_config_paths_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut bundle = sample_bundle();
        bundle.config.push(Payload::new("../outside.txt", b"x".as_slice()));

        let err = materialize(&bundle, dir.path(), |_| {}).unwrap_err();

        assert!(matches!(err, LaunchError::InvalidPayloadPath(_)));
        assert!(!dir.path().join("outside.txt").exists());
    }

    #[test]
    fn base_folder_blocked_by_a_file_is_a_materialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, b"file").unwrap();

        let err = materialize(&sample_bundle(), &blocker, |_| {}).unwrap_err();

        assert!(matches!(err, LaunchError::Materialize { .. }));
    }
}
