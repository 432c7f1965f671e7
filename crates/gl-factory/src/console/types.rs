use gl_core::LogEntry;

#[derive(Debug, Clone)]
pub enum ConsoleMessage {
    Append(LogEntry),
    Status(String),
}
