//! Output listener port
//!
//! SDK subprocess output is streamed line by line, never buffered.

/// Receives each line a subprocess writes to stdout or stderr
pub trait OutputListener: Send + Sync {
    fn on_line(&self, line: &str);
}

/// Forwards lines to the tracing subscriber with a `GCLOUD: ` prefix
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOutputListener;

impl OutputListener for LoggingOutputListener {
    fn on_line(&self, line: &str) {
        tracing::info!("GCLOUD: {}", line);
    }
}

/// Discards output
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOutputListener;

impl OutputListener for NoopOutputListener {
    fn on_line(&self, _line: &str) {}
}
