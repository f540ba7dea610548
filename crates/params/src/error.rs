use alloy_primitives::Address;
use emint_chainspec::ForkOrderError;

/// Errors returned by [`Params::validate`](crate::Params::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    /// The fee denomination does not match the denomination grammar.
    #[error("invalid evm denom {denom:?}")]
    InvalidDenom {
        /// The rejected denomination.
        denom: String,
    },
    /// An extra EIP id is outside the activatable allow-list.
    #[error("EIP {eip} is not activatable, valid EIPs are {valid:?}", valid = crate::ACTIVATABLE_EIPS)]
    UnknownEip {
        /// The rejected EIP id.
        eip: i64,
    },
    /// The fork schedule is not monotonic.
    #[error(transparent)]
    ForkOrder(#[from] ForkOrderError),
    /// An enabled precompile entry is not a well-formed hex address.
    #[error("invalid hex address {address:?}")]
    InvalidAddress {
        /// The rejected entry, verbatim.
        address: String,
    },
    /// The enabled precompiles are out of ascending byte order.
    #[error("enabled precompiles are not sorted, {next} should come before {prev}")]
    PrecompilesNotSorted {
        /// The address that precedes `next` in the input.
        prev: Address,
        /// The out-of-order address.
        next: Address,
    },
    /// The same precompile address is enabled more than once.
    #[error("enabled precompiles are not unique, {address} is repeated")]
    PrecompilesNotUnique {
        /// The duplicated address.
        address: Address,
    },
}
