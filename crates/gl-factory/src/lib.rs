pub mod config;
pub mod console;
pub mod error;
pub mod extractor;
pub mod opener;
pub mod orchestrator;
pub mod runner;

pub use config::LauncherConfig;
pub use error::{LaunchError, Result};
