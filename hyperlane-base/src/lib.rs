//! Common plumbing for the Hyperlane operations tools: loading settings,
//! configuring tracing, exporting metrics and building contract handles from
//! configuration.

// Forbid unsafe code outside of tests
#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(missing_docs)]

pub mod settings;

mod context;
pub use context::*;

mod metrics;
pub use metrics::*;
