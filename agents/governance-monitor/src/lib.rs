//! The governance monitor reads the `recoveryActiveAt` timestamp of each
//! network's governance router and exports it as a prometheus gauge.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use agent::GovernanceMonitor;
pub use monitor::*;
pub use settings::MonitorSettings;

mod agent;
mod monitor;
mod settings;
