use std::sync::Arc;

/// Specifies a logger type which is called with various information about work done.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which writes messages to standard output.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|message: &str| println!("{message}"))
}

/// Creates a logger which discards all messages.
pub fn create_noop_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
