use std::collections::HashMap;
use std::sync::Arc;

use ethers::providers::Middleware;

use hyperlane_core::{ChainResult, HyperlaneProtocolError};

/// Clients for every configured chain, keyed by chain name
#[derive(Debug)]
pub struct MultiProvider<M> {
    clients: HashMap<String, Arc<M>>,
}

impl<M> Default for MultiProvider<M> {
    fn default() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }
}

impl<M> MultiProvider<M>
where
    M: Middleware + 'static,
{
    /// Register the client for `chain`, replacing any previous one
    pub fn insert(&mut self, chain: impl Into<String>, client: Arc<M>) {
        self.clients.insert(chain.into(), client);
    }

    /// Get the client for `chain`
    pub fn try_client(&self, chain: &str) -> ChainResult<Arc<M>> {
        self.clients
            .get(chain)
            .cloned()
            .ok_or_else(|| HyperlaneProtocolError::UnknownNetwork(chain.to_owned()).into())
    }
}
