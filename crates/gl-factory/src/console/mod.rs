//! Operator-facing log.
//!
//! Presentation state has one owner: the [`LogBook`]. Every other thread holds a
//! [`LogSink`] and only ever sends messages to it; the owner applies them in
//! arrival order when it calls [`LogBook::pump`].

pub mod core;
pub mod types;

pub use self::core::*;
pub use types::*;
