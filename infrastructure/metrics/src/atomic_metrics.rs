use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use business::domain::cart::metrics::{CartMetrics, CartOperation};

#[derive(Default)]
struct Counters {
    calls: AtomicU64,
    errors: AtomicU64,
}

/// In-process call and error counters, one pair per cart operation.
#[derive(Default)]
pub struct AtomicCartMetrics {
    get_cart: Counters,
    add_items: Counters,
    remove_items: Counters,
    delete_cart: Counters,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationCounts {
    pub calls: u64,
    pub errors: u64,
}

impl AtomicCartMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn counters(&self, operation: CartOperation) -> &Counters {
        match operation {
            CartOperation::GetCart => &self.get_cart,
            CartOperation::AddItems => &self.add_items,
            CartOperation::RemoveItems => &self.remove_items,
            CartOperation::DeleteCart => &self.delete_cart,
        }
    }

    pub fn snapshot(&self, operation: CartOperation) -> OperationCounts {
        let counters = self.counters(operation);
        OperationCounts {
            calls: counters.calls.load(Ordering::Relaxed),
            errors: counters.errors.load(Ordering::Relaxed),
        }
    }

    /// Renders every counter in the Prometheus text exposition format.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("# TYPE cart_calls_total counter\n");
        for operation in CartOperation::ALL {
            let _ = writeln!(
                out,
                "cart_calls_total{{operation=\"{}\"}} {}",
                operation.as_str(),
                self.snapshot(operation).calls
            );
        }
        out.push_str("# TYPE cart_errors_total counter\n");
        for operation in CartOperation::ALL {
            let _ = writeln!(
                out,
                "cart_errors_total{{operation=\"{}\"}} {}",
                operation.as_str(),
                self.snapshot(operation).errors
            );
        }
        out
    }
}

impl CartMetrics for AtomicCartMetrics {
    fn record_call(&self, operation: CartOperation) {
        self.counters(operation)
            .calls
            .fetch_add(1, Ordering::Relaxed);
    }

    fn record_error(&self, operation: CartOperation) {
        self.counters(operation)
            .errors
            .fetch_add(1, Ordering::Relaxed);
    }
}
