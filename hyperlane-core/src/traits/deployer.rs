use std::fmt::Debug;

use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{ChainResult, TestRecipient};

/// Capability implemented once per contract family: deploy and configure
/// that family's contracts on a chain.
#[async_trait]
pub trait ContractDeployer: Send + Sync + Debug {
    /// Per-chain configuration for the deployment
    type Config: Debug + Send + Sync;
    /// Handles to the deployed contracts
    type Contracts: Send;

    /// Deploy and configure the contracts on `chain`.
    async fn deploy_contracts(
        &self,
        chain: &str,
        config: &Self::Config,
    ) -> ChainResult<Self::Contracts>;
}

/// Creates new TestRecipient instances. Implementations own nonce, gas and
/// receipt handling.
#[async_trait]
#[auto_impl(&, Box, Arc)]
pub trait TestRecipientFactory: Send + Sync + Debug {
    /// Deploy a fresh TestRecipient on `chain`. It takes no constructor
    /// arguments.
    async fn deploy_test_recipient(&self, chain: &str) -> ChainResult<Box<dyn TestRecipient>>;
}
