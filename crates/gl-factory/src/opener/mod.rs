pub mod cli;
pub mod core;

pub use self::core::*;
pub use cli::*;
