#![allow(non_snake_case)]

use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use mockall::*;

use hyperlane_core::*;

mock! {
    pub GovernanceRouterContract {
        pub fn _recovery_active_at(&self) -> ChainResult<U256> {}
    }
}

/// A governance router on a named network whose reads are mocked
pub struct MockGovernanceRouter {
    network: String,
    address: H256,
    contract: MockGovernanceRouterContract,
}

impl MockGovernanceRouter {
    pub fn named(network: &str) -> Self {
        Self {
            network: network.to_owned(),
            address: H256::from_low_u64_be(network.len() as u64),
            contract: MockGovernanceRouterContract::new(),
        }
    }
}

impl Deref for MockGovernanceRouter {
    type Target = MockGovernanceRouterContract;

    fn deref(&self) -> &Self::Target {
        &self.contract
    }
}

impl DerefMut for MockGovernanceRouter {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.contract
    }
}

impl std::fmt::Debug for MockGovernanceRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockGovernanceRouter({})", self.network)
    }
}

impl HyperlaneContract for MockGovernanceRouter {
    fn network(&self) -> &str {
        &self.network
    }

    fn address(&self) -> H256 {
        self.address
    }
}

#[async_trait]
impl GovernanceRouter for MockGovernanceRouter {
    async fn recovery_active_at(&self) -> ChainResult<U256> {
        self._recovery_active_at()
    }
}
