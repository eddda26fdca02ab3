use ethers::prelude::LocalWallet;
use eyre::{bail, Context, Result};
use serde::Deserialize;

/// Ethereum signer types
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SignerConf {
    /// A local hex key
    HexKey {
        /// Hex string of private key, with or without 0x prefix
        key: String,
    },
    /// Assume node will sign on RPC calls
    #[serde(other)]
    #[default]
    Node,
}

impl SignerConf {
    /// Try to convert the signer configuration into a local wallet
    pub fn try_into_wallet(&self) -> Result<LocalWallet> {
        match self {
            SignerConf::HexKey { key } => key
                .trim_start_matches("0x")
                .parse::<LocalWallet>()
                .context("Invalid hex key"),
            SignerConf::Node => bail!("Node signers cannot sign locally; configure a hexKey signer"),
        }
    }
}
