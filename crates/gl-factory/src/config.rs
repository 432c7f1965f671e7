use crate::runner::Interpreter;
use std::{
    env,
    path::{Path, PathBuf},
};

pub const SCRIPT_FILE: &str = "Final PS Script.txt";
pub const TEMPLATE_FILE: &str = "Power BI Governance Model.pbit";
pub const CONFIG_DIR: &str = "Config";

pub const ENV_BASE_DIR: &str = "GL_BASE_DIR";
pub const ENV_INTERPRETER: &str = "GL_INTERPRETER";

/// Where the workspace lives and what runs the script.
#[derive(Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    pub base_dir: PathBuf,
    pub interpreter: Interpreter,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            interpreter: Interpreter::default(),
        }
    }
}

impl LauncherConfig {
    pub fn new(base_dir: impl Into<PathBuf>, interpreter: Interpreter) -> Self {
        Self {
            base_dir: base_dir.into(),
            interpreter,
        }
    }

    /// Reads `GL_BASE_DIR` / `GL_INTERPRETER`, falling back to platform defaults.
    /// Callers load `.env` first if they want it honoured.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os(ENV_BASE_DIR).filter(|v| !v.is_empty()) {
            config.base_dir = PathBuf::from(dir);
        }
        if let Some(program) = env::var_os(ENV_INTERPRETER).filter(|v| !v.is_empty()) {
            config.interpreter = Interpreter::powershell(program);
        }

        tracing::debug!(
            base_dir = %config.base_dir.display(),
            interpreter = %config.interpreter.program.display(),
            "launcher configuration resolved"
        );
        config
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_interpreter(mut self, interpreter: Interpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn script_path(&self) -> PathBuf {
        self.base_dir.join(SCRIPT_FILE)
    }

    pub fn template_path(&self) -> PathBuf {
        self.base_dir.join(TEMPLATE_FILE)
    }

    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.join(CONFIG_DIR)
    }
}

#[cfg(windows)]
fn default_base_dir() -> PathBuf {
    PathBuf::from(r"C:\Power BI Backups")
}

#[cfg(not(windows))]
fn default_base_dir() -> PathBuf {
    env::temp_dir().join("Power BI Backups")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_hang_off_base_dir() {
        let config = LauncherConfig::default().with_base_dir("/srv/backups");
        assert_eq!(config.script_path(), Path::new("/srv/backups").join(SCRIPT_FILE));
        assert_eq!(config.template_path(), Path::new("/srv/backups").join(TEMPLATE_FILE));
        assert_eq!(config.config_dir(), Path::new("/srv/backups").join("Config"));
    }

    #[test]
    fn default_base_dir_is_named_after_the_product() {
        let config = LauncherConfig::default();
        assert!(config.base_dir().ends_with("Power BI Backups"));
    }
}
