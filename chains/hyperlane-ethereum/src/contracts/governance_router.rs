#![allow(clippy::enum_variant_names)]

use std::sync::Arc;

use async_trait::async_trait;
use ethers::providers::Middleware;
use tracing::instrument;

use hyperlane_core::{ChainResult, GovernanceRouter, HyperlaneContract, H160, H256, U256};

use crate::interfaces::i_governance_router::IGovernanceRouter as EthereumGovernanceRouterInternal;

/// A reference to a GovernanceRouter contract on some Ethereum chain
#[derive(Debug)]
pub struct EthereumGovernanceRouter<M>
where
    M: Middleware,
{
    contract: Arc<EthereumGovernanceRouterInternal<M>>,
    network: String,
}

impl<M> EthereumGovernanceRouter<M>
where
    M: Middleware + 'static,
{
    /// Create a reference to a governance router at a specific Ethereum
    /// address on some chain
    pub fn new(network: impl Into<String>, address: H160, provider: Arc<M>) -> Self {
        Self {
            contract: Arc::new(EthereumGovernanceRouterInternal::new(address, provider)),
            network: network.into(),
        }
    }
}

impl<M> HyperlaneContract for EthereumGovernanceRouter<M>
where
    M: Middleware + 'static,
{
    fn network(&self) -> &str {
        &self.network
    }

    fn address(&self) -> H256 {
        self.contract.address().into()
    }
}

#[async_trait]
impl<M> GovernanceRouter for EthereumGovernanceRouter<M>
where
    M: Middleware + 'static,
{
    #[instrument(err, skip(self), fields(network = %self.network))]
    async fn recovery_active_at(&self) -> ChainResult<U256> {
        Ok(self.contract.recovery_active_at().call().await?)
    }
}
