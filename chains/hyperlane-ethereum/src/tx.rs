use std::time::Duration;

use ethers::abi::Detokenize;
use ethers::prelude::{Middleware, TransactionReceipt};
use ethers_contract::builders::ContractCall;
use tracing::{debug, warn};

use hyperlane_core::{ChainCommunicationError, ChainResult, TxOutcome, H256};

/// Upper bound on waiting for a sent transaction to be mined
pub(crate) const RECEIPT_TIMEOUT: Duration = Duration::from_secs(300);

/// Send `call` and wait until it is mined. Dropped, reverted and timed out
/// transactions are errors.
pub(crate) async fn send_and_confirm<M, D>(call: ContractCall<M, D>) -> ChainResult<TxOutcome>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    let pending = call.send().await?;
    let tx_hash: H256 = *pending;
    debug!(?tx_hash, "Sent transaction, waiting for receipt");

    let receipt = tokio::time::timeout(RECEIPT_TIMEOUT, pending)
        .await
        .map_err(|_| {
            warn!(?tx_hash, timeout = ?RECEIPT_TIMEOUT, "Gave up waiting for receipt");
            ChainCommunicationError::TransactionTimeout()
        })??;
    outcome_of(tx_hash, receipt)
}

/// Interpret the receipt of `tx_hash`. `None` means the node forgot the
/// transaction before it was mined.
pub(crate) fn outcome_of(
    tx_hash: H256,
    receipt: Option<TransactionReceipt>,
) -> ChainResult<TxOutcome> {
    let receipt = receipt.ok_or(ChainCommunicationError::TransactionDropped(tx_hash))?;
    let outcome = TxOutcome::from(receipt);
    if !outcome.executed {
        return Err(ChainCommunicationError::TransactionReverted(tx_hash));
    }
    Ok(outcome)
}
