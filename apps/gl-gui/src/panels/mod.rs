pub mod console;
pub mod dialogs;
pub mod footer;
pub mod header;
pub mod launch;
