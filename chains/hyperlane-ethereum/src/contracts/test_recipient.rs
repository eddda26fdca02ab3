use std::sync::Arc;

use async_trait::async_trait;
use ethers::providers::Middleware;
use ethers_contract::builders::ContractCall;
use tracing::{debug, instrument};

use hyperlane_core::{
    ChainResult, HyperlaneContract, IsmConfigurable, TestRecipient, TxOutcome, H160, H256,
};

use crate::interfaces::i_test_recipient::ITestRecipient as EthereumTestRecipientInternal;
use crate::tx::send_and_confirm;

/// A reference to a TestRecipient contract on some Ethereum chain
#[derive(Debug)]
pub struct EthereumTestRecipient<M>
where
    M: Middleware,
{
    contract: Arc<EthereumTestRecipientInternal<M>>,
    network: String,
}

impl<M> EthereumTestRecipient<M>
where
    M: Middleware + 'static,
{
    /// Create a reference to a test recipient at a specific Ethereum address
    /// on some chain
    pub fn new(network: impl Into<String>, address: H160, provider: Arc<M>) -> Self {
        Self {
            contract: Arc::new(EthereumTestRecipientInternal::new(address, provider)),
            network: network.into(),
        }
    }

    /// The call pointing the recipient at `ism`. Only the low 20 bytes of
    /// `ism` are used.
    fn set_ism_call(&self, ism: H256) -> ContractCall<M, ()> {
        self.contract.set_interchain_security_module(H160::from(ism))
    }
}

impl<M> HyperlaneContract for EthereumTestRecipient<M>
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
impl<M> IsmConfigurable for EthereumTestRecipient<M>
where
    M: Middleware + 'static,
{
    #[instrument(err, skip(self), fields(network = %self.network))]
    async fn interchain_security_module(&self) -> ChainResult<H256> {
        let ism = self.contract.interchain_security_module().call().await?;
        Ok(ism.into())
    }

    #[instrument(err, skip(self), fields(network = %self.network))]
    async fn set_interchain_security_module(&self, ism: H256) -> ChainResult<TxOutcome> {
        let outcome = send_and_confirm(self.set_ism_call(ism)).await?;
        debug!(?ism, txid = ?outcome.txid, gas_used = %outcome.gas_used, "ISM updated");
        Ok(outcome)
    }
}

impl<M> TestRecipient for EthereumTestRecipient<M> where M: Middleware + 'static {}
