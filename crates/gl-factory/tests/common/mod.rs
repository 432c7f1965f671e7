#![allow(dead_code)]

use gl_factory::{
    extractor::{Bundle, Payload},
    runner::Interpreter,
    LauncherConfig,
};
use std::path::Path;

/// A bundle whose "PowerShell" script is really a POSIX shell script.
pub fn sh_bundle(script: &'static str) -> Bundle {
    Bundle::new(
        script.as_bytes(),
        b"PBIT".as_slice(),
        vec![
            Payload::new("Config.json", b"{\"BackupFolder\":\"Backups\"}".as_slice()),
            Payload::new("Rules/ImpactRules.json", b"{}".as_slice()),
        ],
    )
}

pub fn sh_config(base: &Path) -> LauncherConfig {
    LauncherConfig::new(base, Interpreter::custom("sh", Vec::<String>::new()))
}

/// Echoes the first stdin line, and fails if a second line ever arrives.
pub const ECHO_ONE_LINE: &str = r#"
IFS= read -r first || { echo "no input" >&2; exit 9; }
if IFS= read -r second; then echo "extra:$second"; exit 8; fi
echo "$first"
echo "got:[$first]"
exit 0
"#;
