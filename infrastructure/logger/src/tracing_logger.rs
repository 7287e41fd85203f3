use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log messages to `tracing` under a single target so they
/// can be filtered with `RUST_LOG=ecoscan=debug`.
pub struct TracingLogger;

const TARGET: &str = "ecoscan";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
