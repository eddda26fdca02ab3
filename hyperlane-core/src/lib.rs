//! This crate contains the chain-agnostic types and contract interfaces used
//! by the Hyperlane operations tooling: the governance monitor and the
//! contract deployers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use error::*;
pub use traits::*;
pub use types::*;

/// Shared read-compare-write configuration logic for deployers
pub mod deploy;

mod error;
mod traits;
mod types;
