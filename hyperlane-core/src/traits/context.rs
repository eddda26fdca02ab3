use std::sync::Arc;

use derive_new::new;

use crate::{ChainResult, GovernanceRouter};

/// The core contracts deployed on a single network.
#[derive(Debug, Clone, new)]
pub struct CoreContracts {
    /// The network's governance router
    pub governance_router: Arc<dyn GovernanceRouter>,
}

/// Resolves the core contracts of a network by name.
#[auto_impl::auto_impl(&, Box, Arc)]
pub trait CoreContext: Send + Sync {
    /// Get the core contracts of `network`. Fails with
    /// `HyperlaneProtocolError::UnknownNetwork` if the network is not known.
    fn core(&self, network: &str) -> ChainResult<&CoreContracts>;

    /// Names of every network this context can resolve.
    fn networks(&self) -> Vec<String>;
}
