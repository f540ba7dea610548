//! EVM hardfork schedule types.
//!
//! This crate contains the fork activation schedule that gates protocol
//! upgrades, along with helpers to validate and query it.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod config;
mod error;
mod hardfork;

pub use config::{ChainConfig, MAINNET};
pub use error::ForkOrderError;
pub use hardfork::Hardfork;
