use super::types::ConsoleMessage;
use gl_core::{LogEntry, Severity};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Cheap, cloneable, thread-safe handle for appending to the log.
#[derive(Debug, Clone)]
pub struct LogSink {
    tx: Sender<ConsoleMessage>,
}

impl LogSink {
    /// Stamps the line now, mirrors it to tracing and queues it for the owner.
    pub fn append(&self, text: impl Into<String>, severity: Severity) {
        let entry = LogEntry::now(text, severity);
        match severity {
            Severity::Error => tracing::error!(target: "gl::console", "{}", entry.text),
            _ => tracing::info!(target: "gl::console", "{}", entry.text),
        }
        // Owner gone means the window is closing; nothing left to show.
        let _ = self.tx.send(ConsoleMessage::Append(entry));
    }

    pub fn info(&self, text: impl Into<String>) {
        self.append(text, Severity::Info);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.append(text, Severity::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.append(text, Severity::Error);
    }

    /// One-line status shown next to the progress indicator.
    pub fn status(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(target: "gl::console", status = %text);
        let _ = self.tx.send(ConsoleMessage::Status(text));
    }
}

/// Owner side of the log: an ordered, unbounded list of entries.
#[derive(Debug)]
pub struct LogBook {
    entries: Vec<LogEntry>,
    status: String,
    tx: Sender<ConsoleMessage>,
    rx: Receiver<ConsoleMessage>,
}

impl Default for LogBook {
    fn default() -> Self {
        Self::new("Ready to start")
    }
}

impl LogBook {
    pub fn new(initial_status: impl Into<String>) -> Self {
        let (tx, rx) = channel();
        Self {
            entries: Vec::new(),
            status: initial_status.into(),
            tx,
            rx,
        }
    }

    pub fn sink(&self) -> LogSink {
        LogSink {
            tx: self.tx.clone(),
        }
    }

    /// Applies every queued message. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                ConsoleMessage::Append(entry) => self.entries.push(entry),
                ConsoleMessage::Status(text) => self.status = text,
            }
            applied += 1;
        }
        applied
    }

    /// Drops queued and visible entries alike.
    pub fn clear(&mut self) {
        self.pump();
        self.entries.clear();
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if some entry's text is exactly `line`.
    pub fn contains_line(&self, line: &str) -> bool {
        self.entries.iter().any(|e| e.text == line)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn nothing_is_visible_until_the_owner_pumps() {
        let mut book = LogBook::default();
        let sink = book.sink();

        sink.info("first");
        sink.error("second");
        assert!(book.is_empty());

        assert_eq!(book.pump(), 2);
        let texts: Vec<_> = book.texts().collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(book.entries()[1].severity, Severity::Error);
    }

    #[test]
    fn per_thread_order_survives_concurrent_senders() {
        let mut book = LogBook::default();
        let handles: Vec<_> = ["out", "err"]
            .into_iter()
            .map(|tag| {
                let sink = book.sink();
                thread::spawn(move || {
                    for i in 0..200 {
                        sink.info(format!("{tag}-{i}"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        book.pump();

        assert_eq!(book.len(), 400);
        for tag in ["out", "err"] {
            let seq: Vec<usize> = book
                .texts()
                .filter_map(|t| t.strip_prefix(&format!("{tag}-")).map(|n| n.parse().unwrap()))
                .collect();
            assert_eq!(seq, (0..200).collect::<Vec<_>>());
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let mut book = LogBook::default();
        let sink = book.sink();
        sink.info("same");
        sink.info("same");
        book.pump();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn clear_discards_pending_messages_too() {
        let mut book = LogBook::default();
        let sink = book.sink();
        sink.info("stale");
        book.clear();
        assert_eq!(book.pump(), 0);
        assert!(book.is_empty());
    }

    #[test]
    fn status_messages_replace_the_status_line() {
        let mut book = LogBook::default();
        assert_eq!(book.status(), "Ready to start");
        book.sink().status("Preparing workspace...");
        book.pump();
        assert_eq!(book.status(), "Preparing workspace...");
        assert!(book.is_empty());
    }
}
