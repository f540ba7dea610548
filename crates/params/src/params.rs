use crate::{validate_eips, validate_enabled_precompiles, Eip712AllowedMsg, ParamsError};
use emint_chainspec::ChainConfig;
use serde::{Deserialize, Serialize};

/// The default fee denomination, in the smallest unit of the native token.
pub const DEFAULT_EVM_DENOM: &str = "aemint";

/// The mutable configuration of the EVM module.
///
/// One logical instance exists per chain state. Governance proposals and
/// genesis records construct or mutate this value and must run
/// [`Params::validate`] before committing it; the validation result is part of
/// consensus, so it depends on nothing but the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Denomination of the native fee token. Must match the denomination
    /// grammar, see [`validate_evm_denom`].
    pub evm_denom: String,
    /// Whether replay-unprotected (pre EIP-155) transactions are accepted.
    pub allow_unprotected_txs: bool,
    /// Whether contract creation is enabled.
    pub enable_create: bool,
    /// Whether contract calls are enabled.
    pub enable_call: bool,
    /// Extra EIPs activated on top of the base fork, in configuration order.
    #[serde(default)]
    pub extra_eips: Vec<i64>,
    /// The hardfork activation schedule.
    pub chain_config: ChainConfig,
    /// Message types permitted for EIP-712 typed-data signing.
    #[serde(default)]
    pub eip712_allowed_msgs: Vec<Eip712AllowedMsg>,
    /// Addresses of the enabled precompiled contracts, as `0x` prefixed hex
    /// strings sorted ascending by raw byte value, without duplicates.
    #[serde(default)]
    pub enabled_precompiles: Vec<String>,
}

impl Params {
    /// Runs all parameter checks, returning the first failure.
    ///
    /// Checks run in a fixed order so every node reports the same error for
    /// the same input: denomination, extra EIPs, fork schedule, enabled
    /// precompiles. The capability flags are plain booleans and cannot be
    /// invalid.
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_evm_denom(&self.evm_denom)?;
        validate_eips(&self.extra_eips)?;
        self.chain_config.validate()?;
        validate_enabled_precompiles(&self.enabled_precompiles)?;
        Ok(())
    }

    /// Returns the configured extra EIPs, preserving configuration order.
    pub fn eips(&self) -> &[i64] {
        &self.extra_eips
    }

    /// Deserializes from a JSON string.
    ///
    /// This is the entry point for records arriving over untyped transport; a
    /// field of the wrong shape fails here, before [`Params::validate`] ever
    /// runs.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            evm_denom: DEFAULT_EVM_DENOM.to_string(),
            allow_unprotected_txs: false,
            enable_create: true,
            enable_call: true,
            extra_eips: Vec::new(),
            chain_config: ChainConfig::default(),
            eip712_allowed_msgs: Vec::new(),
            enabled_precompiles: Vec::new(),
        }
    }
}

/// Checks that a denomination matches the denomination grammar.
///
/// A denomination is 3 to 128 characters long, starts with a lowercase
/// letter, and continues with lowercase letters, digits, or any of `/`, `:`,
/// `.`, `_`, `-`.
pub fn validate_evm_denom(denom: &str) -> Result<(), ParamsError> {
    let invalid = || ParamsError::InvalidDenom { denom: denom.to_string() };

    if !(3..=128).contains(&denom.len()) {
        return Err(invalid())
    }
    let bytes = denom.as_bytes();
    if !bytes[0].is_ascii_lowercase() {
        return Err(invalid())
    }
    if !bytes[1..].iter().all(|&b| {
        b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-')
    }) {
        return Err(invalid())
    }
    Ok(())
}
