//! Logging sink contract and its implementations.

use std::fmt;
use std::sync::{Arc, Mutex};

/// How a line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Resolved,
    Rejected,
    Exception,
    Info,
}

impl Style {
    /// Marker printed in front of outcome lines.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Style::Resolved => Some("(Rs)"),
            Style::Rejected => Some("(Rj)"),
            Style::Exception => Some("(Ex)"),
            Style::Info => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Resolved => "resolved",
            Style::Rejected => "rejected",
            Style::Exception => "exception",
            Style::Info => "info",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for harness output. One call produces one line.
pub trait Sink: Send + Sync {
    fn log(&self, message: &str, style: Style);
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn log(&self, message: &str, style: Style) {
        (**self).log(message, style)
    }
}

/// Sink that emits every line as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn log(&self, message: &str, style: Style) {
        match style {
            Style::Resolved | Style::Info => tracing::info!(style = %style, "{}", message),
            Style::Rejected => tracing::warn!(style = %style, "{}", message),
            Style::Exception => tracing::error!(style = %style, "{}", message),
        }
    }
}

/// A recorded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub style: Style,
    pub message: String,
}

/// Sink that keeps every line in memory.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line logged so far, in order.
    pub fn lines(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Lines logged with the given style.
    pub fn with_style(&self, style: Style) -> Vec<LogLine> {
        self.lines().into_iter().filter(|l| l.style == style).collect()
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn log(&self, message: &str, style: Style) {
        let line = LogLine {
            style,
            message: message.to_string(),
        };
        match self.lines.lock() {
            Ok(mut guard) => guard.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(Style::Resolved.marker(), Some("(Rs)"));
        assert_eq!(Style::Rejected.marker(), Some("(Rj)"));
        assert_eq!(Style::Exception.marker(), Some("(Ex)"));
        assert_eq!(Style::Info.marker(), None);
        assert_eq!(Style::Exception.to_string(), "exception");
    }

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        assert!(handle.is_empty());

        sink.log("first", Style::Info);
        sink.log("second", Style::Rejected);

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.lines()[0].message, "first");
        assert_eq!(handle.with_style(Style::Rejected).len(), 1);
    }

    #[test]
    fn test_arc_sink_forwards() {
        let sink = MemorySink::new();
        let shared: Arc<dyn Sink> = Arc::new(sink.clone());
        shared.log("via arc", Style::Resolved);
        assert_eq!(sink.with_style(Style::Resolved)[0].message, "via arc");
    }

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_sink_levels() {
        let writer = CaptureWriter::default();
        let make_writer = writer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || make_writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.log("(Ex) boom", Style::Exception);
            TracingSink.log("(Rj) nope", Style::Rejected);
            TracingSink.log("(Rs) 42", Style::Resolved);
        });

        let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("(Ex) boom"));
        assert!(lines[0].contains("style=exception"));
        assert!(lines[1].contains("WARN"));
        assert!(lines[1].contains("style=rejected"));
        assert!(lines[2].contains("INFO"));
        assert!(lines[2].contains("(Rs) 42"));
    }
}
