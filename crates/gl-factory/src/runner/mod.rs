pub mod core;
pub mod handle;
pub mod types;
pub mod utils;

pub use self::core::*;
pub use handle::*;
pub use types::*;
pub use utils::*;
