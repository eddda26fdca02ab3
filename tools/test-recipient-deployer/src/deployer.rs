use async_trait::async_trait;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use hyperlane_core::{
    deploy::configure_ism, ChainResult, ContractDeployer, HyperlaneContract, TestRecipient,
    TestRecipientFactory, H160, H256,
};

/// Per-chain TestRecipient configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecipientConfig {
    /// ISM the recipient should use. Left untouched if unset.
    #[serde(default)]
    pub interchain_security_module: Option<H160>,
}

/// The contracts produced by a TestRecipient deployment
#[derive(Debug)]
pub struct TestRecipientContracts {
    /// The freshly deployed recipient
    pub test_recipient: Box<dyn TestRecipient>,
}

impl TestRecipientContracts {
    /// Addresses of the deployed contracts, keyed by logical name
    pub fn addresses(&self) -> TestRecipientAddresses {
        TestRecipientAddresses {
            test_recipient: H160::from(self.test_recipient.address()),
        }
    }
}

/// Serializable addresses of a TestRecipient deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecipientAddresses {
    /// Address of the TestRecipient
    pub test_recipient: H160,
}

/// Deploys TestRecipient contracts through a [`TestRecipientFactory`]
#[derive(Debug, new)]
pub struct TestRecipientDeployer<F> {
    factory: F,
}

#[async_trait]
impl<F> ContractDeployer for TestRecipientDeployer<F>
where
    F: TestRecipientFactory,
{
    type Config = TestRecipientConfig;
    type Contracts = TestRecipientContracts;

    #[instrument(err, skip(self))]
    async fn deploy_contracts(
        &self,
        chain: &str,
        config: &TestRecipientConfig,
    ) -> ChainResult<TestRecipientContracts> {
        info!("Deploying TestRecipient");
        let test_recipient = self.factory.deploy_test_recipient(chain).await?;

        match config.interchain_security_module {
            Some(ism) => {
                info!(?ism, "Checking TestRecipient ISM");
                configure_ism(test_recipient.as_ref(), H256::from(ism)).await?;
            }
            None => warn!("No ISM config provided for TestRecipient"),
        }

        Ok(TestRecipientContracts { test_recipient })
    }
}
