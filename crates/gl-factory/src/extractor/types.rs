use std::{borrow::Cow, path::PathBuf};

/// One configuration file, addressed relative to `<base>/Config`.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub relative_path: PathBuf,
    pub bytes: Cow<'static, [u8]>,
}

impl Payload {
    pub fn new(relative_path: impl Into<PathBuf>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            relative_path: relative_path.into(),
            bytes: bytes.into(),
        }
    }
}

/// Everything that gets unpacked into the workspace.
/// `None` models a payload that failed to ship with the binary.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub script: Option<Cow<'static, [u8]>>,
    pub template: Option<Cow<'static, [u8]>>,
    pub config: Vec<Payload>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractStatus {
    CreatedBaseFolder(PathBuf),
    ScriptWritten(PathBuf),
    TemplateWritten(PathBuf),
    ConfigWritten { count: usize },
}
