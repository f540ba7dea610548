use crate::{ForkOrderError, Hardfork};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The Ethereum mainnet activation schedule.
///
/// Heights are the observed mainnet activation blocks. Kept for callers that
/// mirror mainnet behavior and as a well-known monotonic schedule.
pub static MAINNET: Lazy<ChainConfig> = Lazy::new(|| ChainConfig {
    homestead_block: Some(1_150_000),
    dao_fork_block: Some(1_920_000),
    eip150_block: Some(2_463_000),
    eip155_block: Some(2_675_000),
    eip158_block: Some(2_675_000),
    byzantium_block: Some(4_370_000),
    constantinople_block: Some(7_280_000),
    petersburg_block: Some(7_280_000),
    istanbul_block: Some(9_069_000),
    muir_glacier_block: Some(9_200_000),
    berlin_block: Some(12_244_000),
    london_block: Some(12_965_000),
    arrow_glacier_block: Some(13_773_000),
    gray_glacier_block: Some(15_050_000),
    merge_netsplit_block: None,
    shanghai_block: Some(17_034_870),
    cancun_block: Some(19_426_587),
});

/// The hardfork activation schedule of a chain.
///
/// Each fork maps to the block height at which its rules take effect, with
/// `None` meaning the fork is never activated. A schedule is well formed when
/// every activated fork is scheduled at or after all forks activated before it
/// in the canonical upgrade order, which [`ChainConfig::validate`] enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// `Homestead` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homestead_block: Option<u64>,
    /// `Dao` hardfork switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dao_fork_block: Option<u64>,
    /// `Eip150` (Tangerine Whistle) switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip150_block: Option<u64>,
    /// `Eip155` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip155_block: Option<u64>,
    /// `Eip158` (Spurious Dragon) switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip158_block: Option<u64>,
    /// `Byzantium` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byzantium_block: Option<u64>,
    /// `Constantinople` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constantinople_block: Option<u64>,
    /// `Petersburg` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petersburg_block: Option<u64>,
    /// `Istanbul` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istanbul_block: Option<u64>,
    /// `MuirGlacier` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muir_glacier_block: Option<u64>,
    /// `Berlin` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub berlin_block: Option<u64>,
    /// `London` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub london_block: Option<u64>,
    /// `ArrowGlacier` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_glacier_block: Option<u64>,
    /// `GrayGlacier` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gray_glacier_block: Option<u64>,
    /// Virtual fork after the merge, used as a network splitter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_netsplit_block: Option<u64>,
    /// `Shanghai` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shanghai_block: Option<u64>,
    /// `Cancun` switch block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancun_block: Option<u64>,
}

impl ChainConfig {
    /// Get the activation height of the given fork, or `None` if it never
    /// activates.
    pub const fn fork_block(&self, fork: Hardfork) -> Option<u64> {
        match fork {
            Hardfork::Homestead => self.homestead_block,
            Hardfork::Dao => self.dao_fork_block,
            Hardfork::Eip150 => self.eip150_block,
            Hardfork::Eip155 => self.eip155_block,
            Hardfork::Eip158 => self.eip158_block,
            Hardfork::Byzantium => self.byzantium_block,
            Hardfork::Constantinople => self.constantinople_block,
            Hardfork::Petersburg => self.petersburg_block,
            Hardfork::Istanbul => self.istanbul_block,
            Hardfork::MuirGlacier => self.muir_glacier_block,
            Hardfork::Berlin => self.berlin_block,
            Hardfork::London => self.london_block,
            Hardfork::ArrowGlacier => self.arrow_glacier_block,
            Hardfork::GrayGlacier => self.gray_glacier_block,
            Hardfork::MergeNetsplit => self.merge_netsplit_block,
            Hardfork::Shanghai => self.shanghai_block,
            Hardfork::Cancun => self.cancun_block,
        }
    }

    /// Get an iterator of all hardforks with their respective activation
    /// heights, in canonical upgrade order.
    pub fn forks_iter(&self) -> impl Iterator<Item = (Hardfork, Option<u64>)> {
        [
            (Hardfork::Homestead, self.homestead_block),
            (Hardfork::Dao, self.dao_fork_block),
            (Hardfork::Eip150, self.eip150_block),
            (Hardfork::Eip155, self.eip155_block),
            (Hardfork::Eip158, self.eip158_block),
            (Hardfork::Byzantium, self.byzantium_block),
            (Hardfork::Constantinople, self.constantinople_block),
            (Hardfork::Petersburg, self.petersburg_block),
            (Hardfork::Istanbul, self.istanbul_block),
            (Hardfork::MuirGlacier, self.muir_glacier_block),
            (Hardfork::Berlin, self.berlin_block),
            (Hardfork::London, self.london_block),
            (Hardfork::ArrowGlacier, self.arrow_glacier_block),
            (Hardfork::GrayGlacier, self.gray_glacier_block),
            (Hardfork::MergeNetsplit, self.merge_netsplit_block),
            (Hardfork::Shanghai, self.shanghai_block),
            (Hardfork::Cancun, self.cancun_block),
        ]
        .into_iter()
    }

    /// Checks that the fork schedule is monotonic.
    ///
    /// Walks the forks in canonical order and requires every activated fork to
    /// be scheduled at or after the forks activated before it. Unset forks are
    /// skipped. The first violation is returned.
    pub fn validate(&self) -> Result<(), ForkOrderError> {
        let mut last: Option<(Hardfork, u64)> = None;
        for (fork, block) in self.forks_iter() {
            let Some(block) = block else { continue };
            if let Some((earlier, earlier_block)) = last {
                if earlier_block > block {
                    return Err(ForkOrderError {
                        earlier,
                        earlier_block,
                        later: fork,
                        later_block: block,
                    })
                }
            }
            last = Some((fork, block));
        }
        Ok(())
    }

    /// Convenience method to check if the given fork is active at a given
    /// block number.
    ///
    /// The activation block itself is considered active.
    #[inline]
    pub const fn fork_active_at_block(&self, fork: Hardfork, block_number: u64) -> bool {
        match self.fork_block(fork) {
            Some(activation) => block_number >= activation,
            None => false,
        }
    }

    /// Convenience method to check if [`Hardfork::London`] is active at a
    /// given block number.
    #[inline]
    pub const fn is_london_active_at_block(&self, block_number: u64) -> bool {
        self.fork_active_at_block(Hardfork::London, block_number)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        // A chain that launches with every upgrade already active.
        Self {
            homestead_block: Some(0),
            dao_fork_block: Some(0),
            eip150_block: Some(0),
            eip155_block: Some(0),
            eip158_block: Some(0),
            byzantium_block: Some(0),
            constantinople_block: Some(0),
            petersburg_block: Some(0),
            istanbul_block: Some(0),
            muir_glacier_block: Some(0),
            berlin_block: Some(0),
            london_block: Some(0),
            arrow_glacier_block: Some(0),
            gray_glacier_block: Some(0),
            merge_netsplit_block: Some(0),
            shanghai_block: Some(0),
            cancun_block: Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_schedule_is_monotonic() {
        assert_matches!(ChainConfig::default().validate(), Ok(()));
    }

    #[test]
    fn mainnet_schedule_is_monotonic() {
        assert_matches!(MAINNET.validate(), Ok(()));
    }

    #[test]
    fn forks_iter_is_in_canonical_order() {
        let forks: Vec<_> = ChainConfig::default().forks_iter().map(|(fork, _)| fork).collect();
        assert_eq!(forks.len(), 17);
        assert_eq!(forks.first(), Some(&Hardfork::Homestead));
        assert_eq!(forks.last(), Some(&Hardfork::Cancun));
    }

    #[test]
    fn rejects_fork_scheduled_below_predecessor() {
        let config = ChainConfig { london_block: Some(12_243_999), ..MAINNET.clone() };

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ForkOrderError {
                earlier: Hardfork::Berlin,
                earlier_block: 12_244_000,
                later: Hardfork::London,
                later_block: 12_243_999,
            }
        );
        assert!(err.to_string().contains("unsupported fork ordering"));
    }

    #[test]
    fn unset_forks_are_skipped() {
        // Berlin is unset, so London is compared against Istanbul instead
        // and the schedule stays valid.
        let config = ChainConfig {
            berlin_block: None,
            muir_glacier_block: None,
            ..MAINNET.clone()
        };
        assert_matches!(config.validate(), Ok(()));
    }

    #[test]
    fn equal_heights_are_allowed() {
        // Constantinople and Petersburg activate in the same block on mainnet.
        assert_eq!(MAINNET.constantinople_block, MAINNET.petersburg_block);
        assert_matches!(MAINNET.validate(), Ok(()));
    }

    #[test]
    fn london_activation_is_inclusive() {
        assert!(!MAINNET.is_london_active_at_block(5));
        assert!(MAINNET.is_london_active_at_block(12_965_000));
        assert!(MAINNET.is_london_active_at_block(12_965_001));
    }

    #[test]
    fn unset_fork_is_never_active() {
        assert!(!MAINNET.fork_active_at_block(Hardfork::MergeNetsplit, u64::MAX));
    }

    #[test]
    fn serde_omits_unset_forks() {
        let json = serde_json::to_value(&*MAINNET).unwrap();
        assert!(json.get("merge_netsplit_block").is_none());
        assert_eq!(json["london_block"], 12_965_000);

        let decoded: ChainConfig = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, *MAINNET);
    }
}
