use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards cart use case messages to `tracing` under the `cart` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cart", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cart", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cart", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cart", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_log_without_installed_subscriber() {
        let logger = TracingLogger;

        logger.info("cart 1 updated");
        logger.warn("cart 1 slow write");
        logger.error("cart 1 write failed");
        logger.debug("cart 1 is now empty");
    }
}
