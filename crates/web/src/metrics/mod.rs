//! Prometheus metrics collection.
//!
//! Provides application metrics in Prometheus format.

use prometheus_client::encoding::{EncodeLabelSet, text::encode};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::{Histogram, exponential_buckets};
use prometheus_client::registry::Registry;

/// Label used for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// HTTP request labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct HttpLabels {
    pub method: String,
    /// Route pattern, e.g. `/search/{*rest}`, so labels stay bounded.
    pub path: String,
    pub status: u16,
}

/// Page render labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct PageLabels {
    pub page: String,
}

/// Application metrics.
pub struct Metrics {
    registry: Registry,

    /// HTTP request counter by method/path/status.
    pub http_requests: Family<HttpLabels, Counter>,

    /// HTTP request duration histogram.
    pub http_duration_seconds: Family<HttpLabels, Histogram>,

    /// Sign-out actions.
    pub sign_outs: Counter,

    /// Rendered pages by page name.
    pub page_renders: Family<PageLabels, Counter>,
}

impl Metrics {
    /// Create a new metrics registry.
    ///
    /// Counters are registered without the `_total` suffix; the text
    /// encoder appends it.
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let http_requests = Family::<HttpLabels, Counter>::default();
        registry.register(
            "http_requests",
            "Total HTTP requests",
            http_requests.clone(),
        );

        let http_duration_seconds = Family::<HttpLabels, Histogram>::new_with_constructor(|| {
            Histogram::new(exponential_buckets(0.001, 2.0, 12))
        });
        registry.register(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
            http_duration_seconds.clone(),
        );

        let sign_outs = Counter::default();
        registry.register("sign_outs", "Sign-out actions", sign_outs.clone());

        let page_renders = Family::<PageLabels, Counter>::default();
        registry.register(
            "page_renders",
            "Rendered pages",
            page_renders.clone(),
        );

        Self {
            registry,
            http_requests,
            http_duration_seconds,
            sign_outs,
            page_renders,
        }
    }

    /// Record an HTTP request against its route pattern.
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration_secs: f64) {
        let labels = HttpLabels {
            method: method.to_string(),
            path: route.to_string(),
            status,
        };

        self.http_requests.get_or_create(&labels).inc();
        self.http_duration_seconds
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    /// Record a sign-out.
    pub fn record_sign_out(&self) {
        self.sign_outs.inc();
    }

    /// Record a rendered page.
    pub fn record_page_render(&self, page: &str) {
        self.page_renders
            .get_or_create(&PageLabels {
                page: page.to_string(),
            })
            .inc();
    }

    /// Encode metrics in Prometheus text format.
    ///
    /// # Panics
    ///
    /// Panics if Prometheus metric encoding to a `String` buffer fails.
    /// The `fmt::Write` impl for `String` is infallible, and all metric
    /// labels use derived `EncodeLabelSet` impls that do not produce
    /// `fmt::Error`.
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        #[allow(clippy::expect_used)]
        encode(&mut buffer, &self.registry).expect("encoding metrics");
        buffer
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics").finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let output = Metrics::new().encode();
        assert!(output.contains("# TYPE http_requests counter"));
        assert!(output.contains("# TYPE http_request_duration_seconds histogram"));
        assert!(output.contains("# TYPE page_renders counter"));
        assert!(output.contains("sign_outs_total 0"));
    }

    #[test]
    fn test_record_request() {
        let metrics = Metrics::new();
        metrics.record_request("GET", "/search/{*rest}", 200, 0.05);

        let output = metrics.encode();
        assert!(output.contains(r#"method="GET""#));
        assert!(output.contains(r#"path="/search/{*rest}""#));
        assert!(output.contains(r#"status="200""#));
    }

    #[test]
    fn test_sign_outs_accumulate() {
        let metrics = Metrics::new();
        metrics.record_sign_out();
        metrics.record_sign_out();
        assert_eq!(metrics.sign_outs.get(), 2);
        assert!(metrics.encode().contains("sign_outs_total 2"));
    }

    #[test]
    fn test_page_renders_by_page() {
        let metrics = Metrics::new();
        metrics.record_page_render("dashboard");
        metrics.record_page_render("dashboard");
        metrics.record_page_render("search");

        let dashboard = PageLabels {
            page: "dashboard".to_string(),
        };
        assert_eq!(metrics.page_renders.get_or_create(&dashboard).get(), 2);
        assert!(metrics.encode().contains(r#"page_renders_total{page="search"} 1"#));
    }
}
