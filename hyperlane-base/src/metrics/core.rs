use std::collections::HashMap;
use std::sync::Arc;

use eyre::Result;
use prometheus::{Encoder, IntGaugeVec, Opts, Registry};
use tokio::task::JoinHandle;
use tracing::{error, info};
use warp::{http::StatusCode, Filter};

use super::NAMESPACE;

/// Metrics registry shared by a tool, with an optional HTTP exporter
#[derive(Debug)]
pub struct CoreMetrics {
    const_labels: HashMap<String, String>,
    listen_port: Option<u16>,
    /// Metrics registry for adding new metrics and gathering reports
    registry: Arc<Registry>,
}

impl CoreMetrics {
    /// Track metrics for a particular agent name.
    ///
    /// - `for_agent` name of the agent these metrics are tracking.
    /// - `listen_port` port to start the HTTP server on, if any.
    /// - `registry` prometheus registry to attach the metrics to
    pub fn new(
        for_agent: &str,
        listen_port: Option<u16>,
        registry: Arc<Registry>,
    ) -> prometheus::Result<Self> {
        let const_labels = HashMap::from([
            (
                format!("{NAMESPACE}_baselib_version"),
                env!("CARGO_PKG_VERSION").to_owned(),
            ),
            ("agent".to_owned(), for_agent.to_owned()),
        ]);

        Ok(Self {
            const_labels,
            listen_port,
            registry,
        })
    }

    /// Register an int gauge.
    pub fn new_int_gauge(
        &self,
        metric_name: &str,
        help: &str,
        labels: &[&str],
    ) -> Result<IntGaugeVec> {
        let gauge = IntGaugeVec::new(
            Opts::new(metric_name, help)
                .namespace(NAMESPACE)
                .const_labels(self.const_labels.clone()),
            labels,
        )?;
        self.registry.register(Box::new(gauge.clone()))?;

        Ok(gauge)
    }

    /// Gather available metrics into an encoded (plaintext, OpenMetrics format) report.
    pub fn gather(&self) -> prometheus::Result<Vec<u8>> {
        let collected_metrics = self.registry.gather();
        let mut out_buf = Vec::with_capacity(1024 * 64);
        let encoder = prometheus::TextEncoder::new();
        encoder.encode(&collected_metrics, &mut out_buf)?;
        Ok(out_buf)
    }

    /// Run an HTTP server serving OpenMetrics format reports on `/metrics`
    ///
    /// This is compatible with Prometheus, which ought to be configured to scrape me!
    pub fn run_http_server(self: Arc<CoreMetrics>) -> JoinHandle<()> {
        let Some(port) = self.listen_port else {
            info!("not starting prometheus server");
            return tokio::spawn(std::future::ready(()));
        };

        info!(port, "starting prometheus server on 0.0.0.0:{port}");
        tokio::spawn(async move {
            let metrics = warp::path!("metrics").map(move || {
                let (status, body) = match self.gather() {
                    Ok(body) => (StatusCode::OK, body),
                    Err(error) => {
                        error!(?error, "failed to encode metrics");
                        (StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
                    }
                };
                // try text/plain to make web browsers happy.
                warp::reply::with_status(
                    warp::reply::with_header(body, "Content-Type", "text/plain; charset=utf-8"),
                    status,
                )
            });
            let fallback = warp::any()
                .map(|| warp::reply::with_status("go look at /metrics", StatusCode::NOT_FOUND));

            warp::serve(metrics.or(fallback))
                .run(([0, 0, 0, 0], port))
                .await;
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gauges_are_namespaced_and_labelled() {
        let metrics = CoreMetrics::new("monitor", None, Arc::new(Registry::new())).unwrap();
        let gauge = metrics
            .new_int_gauge("example_gauge", "An example", &["chain"])
            .unwrap();
        gauge.with_label_values(&["alfajores"]).set(42);

        let report = String::from_utf8(metrics.gather().unwrap()).unwrap();
        assert!(report.contains("hyperlane_example_gauge"));
        assert!(report.contains(r#"agent="monitor""#));
        assert!(report.contains(r#"chain="alfajores""#));
        assert!(report.contains(" 42"));
    }

    #[test]
    fn duplicate_registration_fails() {
        let metrics = CoreMetrics::new("monitor", None, Arc::new(Registry::new())).unwrap();
        metrics.new_int_gauge("dup", "first", &["chain"]).unwrap();
        assert!(metrics.new_int_gauge("dup", "second", &["chain"]).is_err());
    }
}
