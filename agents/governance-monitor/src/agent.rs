use std::sync::Arc;
use std::time::Duration;

use eyre::Result;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, info_span, Instrument};

use hyperlane_base::{ChainCoreContext, CoreMetrics, GovernanceMetrics};
use hyperlane_core::CoreContext;

use crate::{monitor_governance, MonitorSettings};

/// Periodically records the recovery timestamp of every monitored
/// governance router.
#[derive(Debug)]
pub struct GovernanceMonitor<C> {
    context: C,
    networks: Vec<String>,
    environment: String,
    interval: Duration,
    core_metrics: Arc<CoreMetrics>,
    metrics: GovernanceMetrics,
}

impl GovernanceMonitor<ChainCoreContext> {
    /// Build the monitor from its settings
    pub fn from_settings(settings: MonitorSettings, metrics: Arc<CoreMetrics>) -> Result<Self> {
        let context = settings.as_ref().build_core_context()?;
        let environment = settings.as_ref().environment.clone();
        Self::new(
            context,
            settings.networks,
            environment,
            Duration::from_secs(settings.interval),
            metrics,
        )
    }
}

impl<C: CoreContext> GovernanceMonitor<C> {
    /// The name used to label this agent's metrics
    pub const AGENT_NAME: &'static str = "governance_monitor";

    /// Create a monitor over `context`. If `networks` is empty every network
    /// the context knows is monitored.
    pub fn new(
        context: C,
        networks: Vec<String>,
        environment: String,
        interval: Duration,
        core_metrics: Arc<CoreMetrics>,
    ) -> Result<Self> {
        let networks = if networks.is_empty() {
            context.networks()
        } else {
            networks
        };
        let metrics = GovernanceMetrics::new(&core_metrics)?;
        Ok(Self {
            context,
            networks,
            environment,
            interval,
            core_metrics,
            metrics,
        })
    }

    /// The networks monitored each round
    pub fn networks(&self) -> &[String] {
        &self.networks
    }

    /// The governance metrics this monitor writes
    pub fn metrics(&self) -> &GovernanceMetrics {
        &self.metrics
    }

    /// Run a single monitoring round
    pub async fn run_once(&self) -> Result<()> {
        monitor_governance(
            &self.context,
            &self.networks,
            &self.metrics,
            &self.environment,
        )
        .await
    }

    /// Start the metrics server and monitor forever. Failed rounds are
    /// logged and retried on the next tick.
    pub async fn run(self) -> Result<()> {
        let _server: JoinHandle<()> = self.core_metrics.clone().run_http_server();

        info!(
            networks = ?self.networks,
            interval = ?self.interval,
            environment = %self.environment,
            "Starting governance monitor"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let span = info_span!("MonitorRound", environment = %self.environment);
            if let Err(e) = self.run_once().instrument(span).await {
                error!("Error monitoring governance routers: {:?}", e);
            }
        }
    }
}
