use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use ethers::abi::{Abi, Tokenize};
use ethers::contract::ContractFactory;
use ethers::providers::Middleware;
use tracing::{info, instrument};

use hyperlane_core::{
    ChainCommunicationError, ChainResult, HyperlaneContract, TestRecipient, TestRecipientFactory,
    TxOutcome, H160,
};

use crate::interfaces::i_test_recipient::ITESTRECIPIENT_ABI;
use crate::tx::{outcome_of, RECEIPT_TIMEOUT};
use crate::{ContractArtifacts, EthereumTestRecipient, MultiProvider};

/// Logical name of the TestRecipient contract, also its artifact key
pub const TEST_RECIPIENT: &str = "testRecipient";

/// Shared deployment plumbing: resolves the chain's client, loads the
/// artifact, sends the creation transaction and waits for its receipt.
#[derive(Debug, new)]
pub struct EthereumDeployer<M> {
    providers: MultiProvider<M>,
    artifacts: ContractArtifacts,
}

impl<M> EthereumDeployer<M>
where
    M: Middleware + 'static,
{
    /// Client for `chain`
    pub fn client(&self, chain: &str) -> ChainResult<Arc<M>> {
        self.providers.try_client(chain)
    }

    /// Deploy a new instance of contract `name` on `chain`
    #[instrument(err, skip(self, abi, constructor_args))]
    pub async fn deploy_contract<T: Tokenize>(
        &self,
        chain: &str,
        name: &str,
        abi: Abi,
        constructor_args: T,
    ) -> ChainResult<(H160, TxOutcome)> {
        let client = self.client(chain)?;
        let bytecode = self
            .artifacts
            .bytecode(name)
            .map_err(ChainCommunicationError::from_other)?;

        info!(chain, contract = name, "Deploying contract");
        let factory = ContractFactory::new(abi, bytecode, client);
        let deploy = factory.deploy(constructor_args)?.send_with_receipt();
        let (contract, receipt) = tokio::time::timeout(RECEIPT_TIMEOUT, deploy)
            .await
            .map_err(|_| ChainCommunicationError::TransactionTimeout())??;
        let outcome = outcome_of(receipt.transaction_hash, Some(receipt))?;
        info!(chain, contract = name, address = ?contract.address(), txid = ?outcome.txid, "Deployed contract");
        Ok((contract.address(), outcome))
    }
}

/// Deploys TestRecipient contracts through an [`EthereumDeployer`]
#[derive(Debug, new)]
pub struct EthereumTestRecipientFactory<M> {
    deployer: Arc<EthereumDeployer<M>>,
}

impl<M> EthereumTestRecipientFactory<M>
where
    M: Middleware + 'static,
{
    /// Handle to the TestRecipient at `address` on `chain`, sending through
    /// that chain's signing client.
    fn recipient_at(&self, chain: &str, address: H160) -> ChainResult<EthereumTestRecipient<M>> {
        Ok(EthereumTestRecipient::new(
            chain,
            address,
            self.deployer.client(chain)?,
        ))
    }
}

#[async_trait]
impl<M> TestRecipientFactory for EthereumTestRecipientFactory<M>
where
    M: Middleware + 'static,
{
    async fn deploy_test_recipient(&self, chain: &str) -> ChainResult<Box<dyn TestRecipient>> {
        let (address, _) = self
            .deployer
            .deploy_contract(chain, TEST_RECIPIENT, ITESTRECIPIENT_ABI.clone(), ())
            .await?;
        let recipient = self.recipient_at(chain, address)?;
        info!(chain, address = ?recipient.address(), "TestRecipient deployed");
        Ok(Box::new(recipient))
    }
}
