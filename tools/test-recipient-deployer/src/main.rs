//! Deploys a TestRecipient to one chain and prints its address.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use hyperlane_base::settings::Settings;
use hyperlane_core::{ContractDeployer, H160};
use hyperlane_ethereum::{EthereumDeployer, EthereumTestRecipientFactory};
use test_recipient_deployer::{TestRecipientConfig, TestRecipientDeployer};

#[derive(Parser, Debug)]
#[command(about = "Deploy a TestRecipient contract")]
struct Args {
    /// Name of the chain to deploy to, as configured under `chains`
    #[arg(long)]
    chain: String,

    /// Interchain security module the recipient should use, as a 0x-prefixed
    /// H160 hex string. The recipient's default is kept if omitted.
    #[arg(long)]
    ism: Option<H160>,

    /// File to write the deployed addresses to, as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

async fn _main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let settings = Settings::new()?;
    settings.tracing.start_tracing()?;

    let providers = settings.build_multi_provider().await?;
    let deployer = Arc::new(EthereumDeployer::new(
        providers,
        settings.contract_artifacts(),
    ));
    let deployer = TestRecipientDeployer::new(EthereumTestRecipientFactory::new(deployer));

    let config = TestRecipientConfig {
        interchain_security_module: args.ism,
    };
    let contracts = deployer
        .deploy_contracts(&args.chain, &config)
        .await
        .with_context(|| format!("Failed to deploy TestRecipient on `{}`", args.chain))?;

    let addresses = serde_json::to_string_pretty(&contracts.addresses())?;
    if let Some(path) = &args.output {
        std::fs::write(path, &addresses)
            .with_context(|| format!("Failed to write addresses to {path:?}"))?;
        info!(?path, "Wrote deployed addresses");
    }
    println!("{addresses}");
    Ok(())
}

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(_main())
}
