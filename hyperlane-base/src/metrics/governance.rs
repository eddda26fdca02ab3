use eyre::Result;
use prometheus::IntGaugeVec;

use super::CoreMetrics;

/// Expected label names for the `governor_recovery_active_at` metric.
pub const GOVERNOR_RECOVERY_ACTIVE_AT_LABELS: &[&str] = &["network", "environment"];
/// Help string for the metric.
pub const GOVERNOR_RECOVERY_ACTIVE_AT_HELP: &str =
    "Timestamp at which recovery mode became active on the network's governance router";

/// Metrics written by the governance monitor
#[derive(Debug, Clone)]
pub struct GovernanceMetrics {
    /// Last observed `recoveryActiveAt` of each governance router.
    /// - `network`: the network the router is deployed on.
    /// - `environment`: the deployment environment, e.g. `mainnet`.
    recovery_active_at: IntGaugeVec,
}

impl GovernanceMetrics {
    /// Register the governance metrics
    pub fn new(metrics: &CoreMetrics) -> Result<Self> {
        Ok(Self {
            recovery_active_at: metrics.new_int_gauge(
                "governor_recovery_active_at",
                GOVERNOR_RECOVERY_ACTIVE_AT_HELP,
                GOVERNOR_RECOVERY_ACTIVE_AT_LABELS,
            )?,
        })
    }

    /// Record the recovery timestamp of `network`'s governance router.
    pub fn set_governor_recovery_active_at(&self, network: &str, environment: &str, value: u64) {
        // Timestamps are bounded to 2^53 - 1 before reaching here.
        self.recovery_active_at
            .with_label_values(&[network, environment])
            .set(i64::try_from(value).unwrap_or(i64::MAX));
    }

    /// Gauge holding the recovery timestamps
    pub fn recovery_active_at(&self) -> &IntGaugeVec {
        &self.recovery_active_at
    }
}
