use ethers::prelude::{Http, Middleware, Provider, Signer, SignerMiddleware};
use eyre::{Context, Result};
use hyperlane_core::H160;
use serde::Deserialize;
use url::Url;

use super::{SignerConf, SigningClient};

/// How to connect to a chain's RPC
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConnectionConf {
    /// HTTP connection details
    Http {
        /// Fully qualified url to connect to
        url: Url,
    },
}

impl ConnectionConf {
    /// Build a read-only provider
    pub fn provider(&self) -> Provider<Http> {
        match self {
            ConnectionConf::Http { url } => Provider::new(Http::new(url.clone())),
        }
    }
}

/// Addresses of the core contracts on a chain
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoreContractAddresses {
    /// Address of the GovernanceRouter contract
    #[serde(default, rename = "governancerouter")]
    pub governance_router: Option<H160>,
}

/// Configuration of a single chain
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConf {
    /// RPC connection
    pub connection: ConnectionConf,
    /// Signer used to send transactions. Only needed for deployments.
    #[serde(default)]
    pub signer: Option<SignerConf>,
    /// Core contract addresses
    #[serde(default)]
    pub addresses: CoreContractAddresses,
}

impl ChainConf {
    /// Build a client signing with `signer`, bound to the chain id reported
    /// by the RPC.
    pub async fn build_signing_client(&self, signer: &SignerConf) -> Result<SigningClient> {
        let provider = self.connection.provider();
        let chain_id = provider
            .get_chainid()
            .await
            .context("Failed to query chain id")?;
        let wallet = signer.try_into_wallet()?.with_chain_id(chain_id.as_u64());
        Ok(SignerMiddleware::new(provider, wallet))
    }
}
