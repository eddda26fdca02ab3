use std::fmt::Debug;

use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{ChainResult, HyperlaneContract, TxOutcome, H256};

/// A contract whose interchain security module can be read and replaced.
#[async_trait]
#[auto_impl(&, Box, Arc)]
pub trait IsmConfigurable: HyperlaneContract + Send + Sync + Debug {
    /// The currently configured ISM. The zero address means none is set.
    async fn interchain_security_module(&self) -> ChainResult<H256>;

    /// Submit a transaction pointing the contract at `ism`.
    async fn set_interchain_security_module(&self, ism: H256) -> ChainResult<TxOutcome>;
}

/// Interface for the TestRecipient chain contract, a minimal recipient used
/// to receive test messages.
#[auto_impl(&, Box, Arc)]
pub trait TestRecipient: IsmConfigurable {}
