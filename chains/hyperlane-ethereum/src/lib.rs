//! Interfaces to the ethereum contracts

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use self::{artifacts::*, contracts::*, deployer::*, multi_provider::*};

mod tx;

mod contracts;

mod artifacts;

mod deployer;

mod multi_provider;

/// Generated contract bindings.
mod interfaces;
