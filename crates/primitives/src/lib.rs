//! Block primitives for an EVM embedded in a host consensus engine.
//!
//! The central type is [`Header`]: an Ethereum block header whose identity is
//! the canonical block identifier assigned by the host engine, not a locally
//! recomputed content hash.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
mod header;

pub use error::HeaderError;
pub use header::{Header, HEADER_FIXED_SIZE};
