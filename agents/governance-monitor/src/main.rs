//! Runs the governance monitor until killed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use eyre::Result;
use prometheus::Registry;

use governance_monitor::{GovernanceMonitor, MonitorSettings};
use hyperlane_base::{ChainCoreContext, CoreMetrics};

async fn _main() -> Result<()> {
    color_eyre::install()?;

    let settings = MonitorSettings::new()?;
    settings.as_ref().tracing.start_tracing()?;

    let metrics = Arc::new(CoreMetrics::new(
        GovernanceMonitor::<ChainCoreContext>::AGENT_NAME,
        settings.as_ref().metrics_port,
        Arc::new(Registry::new()),
    )?);

    let monitor = GovernanceMonitor::from_settings(settings, metrics)?;
    monitor.run().await
}

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(_main())
}
