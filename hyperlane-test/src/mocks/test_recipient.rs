#![allow(non_snake_case)]

use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use mockall::*;

use hyperlane_core::*;

mock! {
    pub TestRecipientContract {
        pub fn _interchain_security_module(&self) -> ChainResult<H256> {}

        pub fn _set_interchain_security_module(&self, ism: H256) -> ChainResult<TxOutcome> {}
    }
}

/// A deployed TestRecipient whose calls are mocked
pub struct MockTestRecipient {
    network: String,
    address: H256,
    contract: MockTestRecipientContract,
}

impl MockTestRecipient {
    pub fn new(network: &str, address: H256) -> Self {
        Self {
            network: network.to_owned(),
            address,
            contract: MockTestRecipientContract::new(),
        }
    }
}

impl Deref for MockTestRecipient {
    type Target = MockTestRecipientContract;

    fn deref(&self) -> &Self::Target {
        &self.contract
    }
}

impl DerefMut for MockTestRecipient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.contract
    }
}

impl std::fmt::Debug for MockTestRecipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockTestRecipient({:?} @ {})", self.address, self.network)
    }
}

impl HyperlaneContract for MockTestRecipient {
    fn network(&self) -> &str {
        &self.network
    }

    fn address(&self) -> H256 {
        self.address
    }
}

#[async_trait]
impl IsmConfigurable for MockTestRecipient {
    async fn interchain_security_module(&self) -> ChainResult<H256> {
        self._interchain_security_module()
    }

    async fn set_interchain_security_module(&self, ism: H256) -> ChainResult<TxOutcome> {
        self._set_interchain_security_module(ism)
    }
}

impl TestRecipient for MockTestRecipient {}

mock! {
    pub TestRecipientFactory {
        pub fn _deploy_test_recipient(&self, chain: &str) -> ChainResult<Box<dyn TestRecipient>> {}
    }
}

impl std::fmt::Debug for MockTestRecipientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockTestRecipientFactory")
    }
}

#[async_trait]
impl TestRecipientFactory for MockTestRecipientFactory {
    async fn deploy_test_recipient(&self, chain: &str) -> ChainResult<Box<dyn TestRecipient>> {
        self._deploy_test_recipient(chain)
    }
}
