use crate::Hardfork;

/// Error returned by [`ChainConfig::validate`](crate::ChainConfig::validate) when a fork is
/// scheduled below one of its predecessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "unsupported fork ordering: {earlier} enabled at block {earlier_block}, but {later} enabled at block {later_block}"
)]
pub struct ForkOrderError {
    /// The fork that comes first in the canonical upgrade order.
    pub earlier: Hardfork,
    /// Activation height of the earlier fork.
    pub earlier_block: u64,
    /// The fork that comes later in the canonical upgrade order.
    pub later: Hardfork,
    /// Activation height of the later fork.
    pub later_block: u64,
}
