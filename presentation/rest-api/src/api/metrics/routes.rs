use std::sync::Arc;

use metrics::AtomicCartMetrics;
use poem_openapi::{OpenApi, payload::PlainText};

use crate::api::tags::ApiTags;

pub struct MetricsApi {
    metrics: Arc<AtomicCartMetrics>,
}

impl MetricsApi {
    pub fn new(metrics: Arc<AtomicCartMetrics>) -> Self {
        Self { metrics }
    }
}

#[OpenApi]
impl MetricsApi {
    /// Cart call and error counters
    ///
    /// Prometheus text format, one `cart_calls_total` and one `cart_errors_total`
    /// sample per operation.
    #[oai(path = "/metrics", method = "get", tag = "ApiTags::Metrics")]
    async fn metrics(&self) -> PlainText<String> {
        PlainText(self.metrics.render_text())
    }
}
