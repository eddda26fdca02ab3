//! Contracts are only ever reconfigured when the value observed on chain
//! differs from the desired one. The decision is a pure function so it can be
//! checked without a chain; [`configure_ism`] executes it.

use tracing::{debug, info, instrument};

use crate::{ChainResult, IsmConfigurable, TxOutcome, H256};

/// A pending change of a contract's interchain security module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsmWriteIntent {
    /// The ISM currently configured on chain
    pub current: H256,
    /// The ISM the contract should point at
    pub desired: H256,
}

/// Decide whether the ISM must be written. Returns `None` when the contract
/// already points at `desired`.
pub fn ism_write_intent(current: H256, desired: H256) -> Option<IsmWriteIntent> {
    (current != desired).then_some(IsmWriteIntent { current, desired })
}

/// Read the contract's current ISM and, only if it differs from `desired`,
/// submit a transaction setting it. Returns the outcome of the transaction if
/// one was sent.
#[instrument(err, skip(contract), fields(network = contract.network(), contract = ?contract.address()))]
pub async fn configure_ism<C>(contract: &C, desired: H256) -> ChainResult<Option<TxOutcome>>
where
    C: IsmConfigurable + ?Sized,
{
    let current = contract.interchain_security_module().await?;
    let Some(intent) = ism_write_intent(current, desired) else {
        debug!(ism = ?desired, "ISM already configured");
        return Ok(None);
    };

    info!(current = ?intent.current, desired = ?intent.desired, "Setting interchain security module");
    let outcome = contract
        .set_interchain_security_module(intent.desired)
        .await?;
    Ok(Some(outcome))
}
