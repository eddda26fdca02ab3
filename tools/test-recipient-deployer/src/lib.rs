//! Deploys a TestRecipient contract and points it at the desired
//! interchain security module.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use deployer::*;

mod deployer;
