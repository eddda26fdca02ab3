use std::fmt::Debug;

use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{ChainResult, HyperlaneContract, U256};

/// Interface for the GovernanceRouter chain contract. Only the attributes
/// the monitor reads are exposed; nothing here mutates chain state.
#[async_trait]
#[auto_impl(&, Box, Arc)]
pub trait GovernanceRouter: HyperlaneContract + Send + Sync + Debug {
    /// Timestamp (seconds since epoch) at which recovery mode became active,
    /// or the contract's sentinel value when it is inactive.
    async fn recovery_active_at(&self) -> ChainResult<U256>;
}
