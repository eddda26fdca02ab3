//! Mocks of the contract interfaces for use in tests

#![forbid(unsafe_code)]
#![allow(missing_docs)]

/// Mock contracts
pub mod mocks;
