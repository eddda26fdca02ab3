pub use ethers_core::types::{H160, H256, U256};

use ethers_core::types::TransactionReceipt;

use crate::HyperlaneProtocolError;

/// Largest integer a double-precision float represents exactly (`2^53 - 1`).
/// Recovery timestamps are reported as gauge values and must not exceed it.
pub const MAX_SAFE_TIMESTAMP: u64 = (1 << 53) - 1;

/// Convert a timestamp read from chain into a native integer, rejecting
/// values above [`MAX_SAFE_TIMESTAMP`].
pub fn u256_to_timestamp(value: U256) -> Result<u64, HyperlaneProtocolError> {
    if value > U256::from(MAX_SAFE_TIMESTAMP) {
        return Err(HyperlaneProtocolError::TimestampOutOfRange(value));
    }
    Ok(value.as_u64())
}

/// The result of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxOutcome {
    /// The txid
    pub txid: H256,
    /// True if executed, false otherwise (reverted, etc.)
    pub executed: bool,
    /// Amount of gas used on this transaction.
    pub gas_used: U256,
    /// Price paid for the gas
    pub gas_price: U256,
}

impl From<TransactionReceipt> for TxOutcome {
    fn from(t: TransactionReceipt) -> Self {
        Self {
            txid: t.transaction_hash,
            executed: t.status.map(|s| s.low_u64() == 1).unwrap_or(false),
            gas_used: t.gas_used.unwrap_or_default(),
            gas_price: t.effective_gas_price.unwrap_or_default(),
        }
    }
}
