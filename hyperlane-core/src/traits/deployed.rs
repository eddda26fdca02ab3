use crate::H256;

/// Interface for a deployed contract.
/// This trait is intended to expose attributes of any contract, and
/// should not consider the purpose or implementation details of the contract.
#[auto_impl::auto_impl(&, Box, Arc)]
pub trait HyperlaneContract {
    /// Name of the network the contract lives on
    fn network(&self) -> &str;

    /// Return the address of this contract.
    fn address(&self) -> H256;
}

