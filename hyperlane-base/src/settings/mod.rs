//! Settings shared by every tool.
//!
//! Keys are matched without regard to case or separators: every source is
//! wrapped in a [`CaseAdapter`] flattening keys, so `metricsPort` in a JSON
//! file and `HYP_METRICSPORT` in the environment name the same setting.
//! Struct fields spanning several words therefore carry an explicit flat
//! `rename`. Chain and artifact names are flattened the same way.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::{env, fmt::Debug};

use config::{Config, Environment, File};
use ethers::prelude::{Http, LocalWallet, Provider, SignerMiddleware};
use eyre::{eyre, Context, Result};
use hyperlane_core::CoreContracts;
use hyperlane_ethereum::{ContractArtifacts, EthereumGovernanceRouter, MultiProvider};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::settings::trace::TracingConfig;
use crate::ChainCoreContext;

pub use case_adapter::CaseAdapter;
pub use chains::*;
pub use signers::*;

/// Key normalisation for config sources
mod case_adapter;
/// Chain configuration
mod chains;
/// Transaction signers
mod signers;
/// Tracing subscriber management
pub mod trace;

/// A client which signs transactions locally
pub type SigningClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Settings common to every tool
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Deployment environment label attached to reported metrics
    /// (e.g. `mainnet`, `testnet`)
    pub environment: String,
    /// Configuration of every known chain, keyed by chain name
    #[serde(default)]
    pub chains: HashMap<String, ChainConf>,
    /// Port to serve prometheus metrics on. No server is started if unset.
    #[serde(default, rename = "metricsport")]
    pub metrics_port: Option<u16>,
    /// The tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
    /// Compiled contract artifacts keyed by logical contract name
    #[serde(default)]
    pub artifacts: HashMap<String, PathBuf>,
}

impl Settings {
    /// Read the base settings from the config locations
    pub fn new() -> Result<Self> {
        load_settings()
    }

    /// Build read-only handles to the core contracts of every configured
    /// chain.
    pub fn build_core_context(&self) -> Result<ChainCoreContext> {
        let mut cores = HashMap::with_capacity(self.chains.len());
        for (name, conf) in &self.chains {
            let core = match conf.addresses.governance_router {
                Some(address) => {
                    let provider = Arc::new(conf.connection.provider());
                    let router = EthereumGovernanceRouter::new(name.as_str(), address, provider);
                    Some(CoreContracts::new(Arc::new(router)))
                }
                None => {
                    debug!(chain = %name, "No governance router configured");
                    None
                }
            };
            cores.insert(name.clone(), core);
        }
        Ok(ChainCoreContext::new(cores))
    }

    /// Build signing clients for every chain which has a signer configured.
    /// Queries each chain for its chain id.
    pub async fn build_multi_provider(&self) -> Result<MultiProvider<SigningClient>> {
        let mut providers = MultiProvider::default();
        for (name, conf) in &self.chains {
            let Some(signer) = &conf.signer else {
                debug!(chain = %name, "No signer configured, skipping");
                continue;
            };
            let client = conf
                .build_signing_client(signer)
                .await
                .with_context(|| format!("Failed to build signing client for chain `{name}`"))?;
            providers.insert(name.as_str(), Arc::new(client));
        }
        Ok(providers)
    }

    /// The configured contract artifacts
    pub fn contract_artifacts(&self) -> ContractArtifacts {
        ContractArtifacts::new(self.artifacts.clone())
    }
}

/// Deserialize a settings object from the configs. See [`load_config`].
pub fn load_settings<T>() -> Result<T>
where
    T: DeserializeOwned + Debug,
{
    settings_from_config(load_config()?)
}

/// Deserialize a settings object from an already built config
pub fn settings_from_config<T>(config: Config) -> Result<T>
where
    T: DeserializeOwned + Debug,
{
    let settings = config
        .try_deserialize::<T>()
        .context("Config deserialization error")?;
    debug!(?settings, "Loaded settings");
    Ok(settings)
}

/// Build the layered config. Sources, later ones overriding earlier ones:
/// - `config/default.json`
/// - `config/{RUN_ENV}.json`
/// - files listed in the comma separated `CONFIG_FILES` env var
/// - env vars prefixed with `HYP_`, with `_` separating nested keys, e.g.
///   `HYP_METRICSPORT=9090` or `HYP_CHAINS_ALFAJORES_CONNECTION_URL=...`
pub fn load_config() -> Result<Config> {
    load_config_with_env(Environment::with_prefix("HYP").separator("_"))
}

fn load_config_with_env(environment: Environment) -> Result<Config> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "default".into());

    let mut builder = Config::builder()
        .add_source(CaseAdapter::flat(
            File::with_name("config/default").required(false),
        ))
        .add_source(CaseAdapter::flat(
            File::with_name(&format!("config/{run_env}")).required(false),
        ));

    let config_file_paths: Vec<String> = env::var("CONFIG_FILES")
        .map(|s| s.split(',').map(|s| s.trim().to_owned()).collect())
        .unwrap_or_default();

    for path in config_file_paths.iter().filter(|p| !p.is_empty()) {
        let p = PathBuf::from(path);
        if !p.is_file() {
            return Err(eyre!(
                "Provided config path via CONFIG_FILES is not a file ({p:?})"
            ));
        }
        builder = builder.add_source(CaseAdapter::flat(File::from(p)));
    }

    builder
        .add_source(CaseAdapter::flat(environment))
        .build()
        .with_context(|| {
            format!("Failed to load config sources (config files: {config_file_paths:?})")
        })
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use hyperlane_core::{CoreContext, H160};
    use maplit::hashmap;

    use super::*;

    const SETTINGS: &str = r#"{
        "environment": "testnet",
        "metricsPort": 9090,
        "tracing": { "fmt": "json", "level": "debug" },
        "chains": {
            "alfajores": {
                "connection": { "type": "http", "url": "http://127.0.0.1:8545" },
                "addresses": { "governanceRouter": "0x0000000000000000000000000000000000000001" }
            },
            "fuji": {
                "connection": { "type": "http", "url": "http://127.0.0.1:8546" },
                "signer": { "type": "hexKey", "key": "0x1111111111111111111111111111111111111111111111111111111111111111" }
            }
        },
        "artifacts": { "testRecipient": "./artifacts/TestRecipient.json" }
    }"#;

    fn parse(json: &str) -> Settings {
        Config::builder()
            .add_source(CaseAdapter::flat(File::from_str(
                json,
                config::FileFormat::Json,
            )))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn parses_settings() {
        let settings = parse(SETTINGS);

        assert_eq!(settings.environment, "testnet");
        assert_eq!(settings.metrics_port, Some(9090));
        assert_eq!(settings.chains.len(), 2);

        let alfajores = &settings.chains["alfajores"];
        assert_eq!(
            alfajores.addresses.governance_router,
            Some(H160::from_low_u64_be(1))
        );
        assert!(alfajores.signer.is_none());

        let fuji = &settings.chains["fuji"];
        assert!(matches!(fuji.signer, Some(SignerConf::HexKey { .. })));
        assert!(fuji.addresses.governance_router.is_none());

        assert!(!settings.chains.contains_key("kovan"));
        assert_eq!(
            settings.artifacts.get("testrecipient"),
            Some(&PathBuf::from("./artifacts/TestRecipient.json"))
        );
    }

    #[test]
    fn optional_sections_default() {
        let settings = parse(r#"{ "environment": "mainnet" }"#);
        assert!(settings.chains.is_empty());
        assert!(settings.metrics_port.is_none());
        assert!(settings.artifacts.is_empty());
    }

    #[test]
    fn core_context_covers_chains_with_router() {
        let settings = parse(SETTINGS);
        let context = settings.build_core_context().unwrap();

        assert_eq!(context.networks(), vec!["alfajores".to_owned()]);
        assert!(context.core("alfajores").is_ok());
        assert!(context.core("fuji").is_err());
    }

    #[test]
    fn loads_from_config_files_and_env_overrides() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SETTINGS.as_bytes()).unwrap();

        env::set_var("CONFIG_FILES", file.path());
        let from_file: Result<Settings> = load_settings();
        let overridden = load_config_with_env(
            Environment::with_prefix("HYP")
                .separator("_")
                .source(Some(hashmap! {
                    "HYP_METRICSPORT".to_owned() => "7777".to_owned(),
                    "HYP_ENVIRONMENT".to_owned() => "mainnet".to_owned(),
                    "HYP_CHAINS_FUJI_ADDRESSES_GOVERNANCEROUTER".to_owned() =>
                        "0x0000000000000000000000000000000000000002".to_owned(),
                })),
        )
        .and_then(settings_from_config::<Settings>);
        env::remove_var("CONFIG_FILES");

        let from_file = from_file.unwrap();
        assert_eq!(from_file.environment, "testnet");
        assert_eq!(from_file.metrics_port, Some(9090));

        let overridden = overridden.unwrap();
        assert_eq!(overridden.environment, "mainnet");
        assert_eq!(overridden.metrics_port, Some(7777));
        assert_eq!(
            overridden.chains["fuji"].addresses.governance_router,
            Some(H160::from_low_u64_be(2))
        );
        assert!(overridden.chains["fuji"].signer.is_some());
    }
}
