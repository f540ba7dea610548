//! EVM module parameters.
//!
//! [`Params`] carries the mutable configuration of the EVM: the fee
//! denomination, capability flags, extra EIPs layered on top of the base
//! fork, the hardfork schedule, EIP-712 signing descriptors, and the set of
//! enabled precompiles. Governance and genesis collaborators construct a
//! [`Params`] value and call [`Params::validate`] before committing it to
//! chain state. Every validating node must reach the identical result for
//! the same input, so all checks here are pure and order-deterministic.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod eip712;
mod eips;
mod error;
mod params;
mod precompiles;

pub use eip712::{Eip712AllowedMsg, Eip712MsgAttrType, Eip712NestedMsgType};
pub use eips::{validate_eips, ACTIVATABLE_EIPS};
pub use error::ParamsError;
pub use params::{validate_evm_denom, Params, DEFAULT_EVM_DENOM};
pub use precompiles::{parse_precompile_address, validate_enabled_precompiles};
