use std::collections::HashMap;

use derive_new::new;
use hyperlane_core::{
    ChainResult, CoreContext, CoreContracts, HyperlaneProtocolError,
};

/// Core contracts for every configured chain. Chains configured without a
/// governance router are known but cannot be resolved.
#[derive(Debug, Default, new)]
pub struct ChainCoreContext {
    cores: HashMap<String, Option<CoreContracts>>,
}

impl CoreContext for ChainCoreContext {
    fn core(&self, network: &str) -> ChainResult<&CoreContracts> {
        match self.cores.get(network) {
            Some(Some(core)) => Ok(core),
            Some(None) => Err(HyperlaneProtocolError::MissingContractAddress {
                network: network.to_owned(),
                contract: "governanceRouter",
            }
            .into()),
            None => Err(HyperlaneProtocolError::UnknownNetwork(network.to_owned()).into()),
        }
    }

    fn networks(&self) -> Vec<String> {
        let mut networks: Vec<String> = self
            .cores
            .iter()
            .filter(|(_, core)| core.is_some())
            .map(|(name, _)| name.clone())
            .collect();
        networks.sort();
        networks
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use hyperlane_core::{ChainCommunicationError, HyperlaneContract};
    use hyperlane_test::mocks::MockGovernanceRouter;
    use maplit::hashmap;

    use super::*;

    #[test]
    fn resolves_configured_networks_only() {
        let router = MockGovernanceRouter::named("alfajores");
        let context = ChainCoreContext::new(hashmap! {
            "alfajores".to_owned() => Some(CoreContracts::new(Arc::new(router))),
            "fuji".to_owned() => None,
        });

        let core = context.core("alfajores").unwrap();
        assert_eq!(core.governance_router.network(), "alfajores");

        assert!(matches!(
            context.core("fuji"),
            Err(ChainCommunicationError::HyperlaneProtocolError(
                HyperlaneProtocolError::MissingContractAddress { .. }
            ))
        ));
        assert!(matches!(
            context.core("kovan"),
            Err(ChainCommunicationError::HyperlaneProtocolError(
                HyperlaneProtocolError::UnknownNetwork(_)
            ))
        ));
        assert_eq!(context.networks(), vec!["alfajores".to_owned()]);
    }
}
