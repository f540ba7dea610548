use crate::HeaderError;
use alloy_consensus::constants::{EMPTY_OMMER_ROOT_HASH, EMPTY_ROOT_HASH};
use alloy_primitives::{Address, Bloom, Bytes, B256, B64, U256};
use core::mem;
use serde::{Deserialize, Serialize};

/// Fixed in-memory size of a [`Header`], excluding variable-length content.
///
/// [`Header::size`] adds the variable terms on top of this baseline.
pub const HEADER_FIXED_SIZE: usize = mem::size_of::<B256>() + // parent hash
    mem::size_of::<B256>() + // ommers hash
    mem::size_of::<Address>() + // beneficiary
    mem::size_of::<B256>() + // state root
    mem::size_of::<B256>() + // transactions root
    mem::size_of::<B256>() + // receipts root
    mem::size_of::<Bloom>() + // logs bloom
    mem::size_of::<U256>() + // difficulty
    mem::size_of::<U256>() + // number
    mem::size_of::<u64>() + // gas limit
    mem::size_of::<u64>() + // gas used
    mem::size_of::<u64>() + // timestamp
    mem::size_of::<Bytes>() + // extra data
    mem::size_of::<B256>() + // mix hash
    mem::size_of::<B64>() + // nonce
    mem::size_of::<Option<U256>>() + // base fee per gas
    mem::size_of::<B256>(); // host hash

/// Block header of an EVM chain hosted inside an external consensus engine.
///
/// The content fields follow the canonical Ethereum header. Identity is the
/// exception: [`Header::hash`] returns [`Header::host_hash`], the block
/// identifier assigned by the host engine, so two headers with different host
/// hashes are different blocks even if every content field coincides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// The hash of the parent block's header.
    pub parent_hash: B256,
    /// The hash of the ommers list portion of this block.
    #[serde(rename = "sha3Uncles")]
    pub ommers_hash: B256,
    /// The address to which all fees collected from this block are
    /// transferred.
    #[serde(rename = "miner")]
    pub beneficiary: Address,
    /// The root of the state trie after all transactions are executed and
    /// finalisations applied.
    pub state_root: B256,
    /// The root of the trie populated with each transaction in the block.
    pub transactions_root: B256,
    /// The root of the trie populated with the receipts of each transaction
    /// in the block.
    pub receipts_root: B256,
    /// The Bloom filter composed from the indexable information in each log
    /// entry of every transaction receipt.
    pub logs_bloom: Bloom,
    /// A scalar value corresponding to the difficulty level of this block.
    pub difficulty: U256,
    /// A scalar value equal to the number of ancestor blocks. Bounded to 64
    /// bits by [`Header::ensure_number_valid`], not by construction.
    pub number: U256,
    /// A scalar value equal to the current limit of gas expenditure per
    /// block.
    #[serde(with = "alloy_serde::quantity")]
    pub gas_limit: u64,
    /// A scalar value equal to the total gas used in transactions in this
    /// block.
    #[serde(with = "alloy_serde::quantity")]
    pub gas_used: u64,
    /// A scalar value equal to the output of Unix time at this block's
    /// inception.
    #[serde(with = "alloy_serde::quantity")]
    pub timestamp: u64,
    /// An arbitrary byte array containing data relevant to this block.
    pub extra_data: Bytes,
    /// A 256-bit hash proving, combined with the nonce, that a sufficient
    /// amount of computation has been carried out on this block.
    pub mix_hash: B256,
    /// A 64-bit value proving, combined with the mix hash, that a sufficient
    /// amount of computation has been carried out on this block.
    pub nonce: B64,
    /// The EIP-1559 base fee per gas. Absent in legacy headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<U256>,
    /// The canonical block identifier assigned by the host consensus engine.
    ///
    /// Authoritative for identity and returned verbatim by [`Header::hash`].
    #[serde(rename = "hash", default)]
    pub host_hash: B256,
}

impl AsRef<Self> for Header {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            parent_hash: Default::default(),
            ommers_hash: EMPTY_OMMER_ROOT_HASH,
            beneficiary: Default::default(),
            state_root: EMPTY_ROOT_HASH,
            transactions_root: EMPTY_ROOT_HASH,
            receipts_root: EMPTY_ROOT_HASH,
            logs_bloom: Default::default(),
            difficulty: Default::default(),
            number: Default::default(),
            gas_limit: 0,
            gas_used: 0,
            timestamp: 0,
            extra_data: Default::default(),
            mix_hash: Default::default(),
            nonce: Default::default(),
            base_fee_per_gas: None,
            host_hash: Default::default(),
        }
    }
}

impl Header {
    /// Returns the canonical identifier of this block, verbatim.
    ///
    /// The identifier is assigned by the host consensus engine and is
    /// deliberately not recomputed from the header contents: consumers such
    /// as subscription and query APIs must resolve the same identifier the
    /// host engine uses for block lookup, or round-trips through those APIs
    /// break.
    #[inline]
    pub const fn hash(&self) -> B256 {
        self.host_hash
    }

    /// Calculate a heuristic for the in-memory size of the [`Header`].
    ///
    /// The fixed baseline plus the extra data length plus a byte count
    /// derived from the difficulty and number bit lengths. Feeds cache
    /// accounting only, never consensus decisions.
    #[inline]
    pub fn size(&self) -> usize {
        HEADER_FIXED_SIZE +
            self.extra_data.len() +
            (self.difficulty.bit_len() + self.number.bit_len()) / 8
    }

    /// Performs a sanity check on the block number field of the header.
    ///
    /// # Errors
    ///
    /// Returns an error if the block number does not fit in 64 bits.
    pub fn ensure_number_valid(&self) -> Result<(), HeaderError> {
        let bit_len = self.number.bit_len();
        if bit_len > 64 {
            return Err(HeaderError::NumberTooLarge { bit_len })
        }
        Ok(())
    }

    /// Performs a sanity check on the block difficulty field of the header.
    ///
    /// # Errors
    ///
    /// Returns an error if the block difficulty exceeds 80 bits.
    pub fn ensure_difficulty_valid(&self) -> Result<(), HeaderError> {
        let bit_len = self.difficulty.bit_len();
        if bit_len > 80 {
            return Err(HeaderError::DifficultyTooLarge { bit_len })
        }
        Ok(())
    }

    /// Performs a sanity check on the extradata field of the header.
    ///
    /// # Errors
    ///
    /// Returns an error if the extradata size is larger than 100 KiB.
    pub fn ensure_extradata_valid(&self) -> Result<(), HeaderError> {
        let len = self.extra_data.len();
        if len > 100 * 1024 {
            return Err(HeaderError::ExtraDataTooLarge { len })
        }
        Ok(())
    }

    /// Performs a sanity check on the base fee field of the header.
    ///
    /// # Errors
    ///
    /// Returns an error if the base fee exceeds 256 bits.
    pub fn ensure_base_fee_valid(&self) -> Result<(), HeaderError> {
        if let Some(base_fee) = self.base_fee_per_gas {
            let bit_len = base_fee.bit_len();
            if bit_len > 256 {
                return Err(HeaderError::BaseFeeTooLarge { bit_len })
            }
        }
        Ok(())
    }

    /// Performs combined sanity checks on multiple header fields.
    ///
    /// Checks the block number, difficulty, extradata, and base fee bounds
    /// in that order and returns the first violation. The bounds are way
    /// beyond what sane production values hold; they exist so headers
    /// stuffed with junk cannot add processing overhead. A received block
    /// whose header fails here must be rejected, not executed.
    pub fn ensure_well_formed(&self) -> Result<(), HeaderError> {
        self.ensure_number_valid()?;
        self.ensure_difficulty_valid()?;
        self.ensure_extradata_valid()?;
        self.ensure_base_fee_valid()?;
        Ok(())
    }

    /// Check if the ommers hash equals the hash of the empty list.
    pub fn ommers_hash_is_empty(&self) -> bool {
        self.ommers_hash == EMPTY_OMMER_ROOT_HASH
    }

    /// Check if the transaction root equals the empty root.
    pub fn transaction_root_is_empty(&self) -> bool {
        self.transactions_root == EMPTY_ROOT_HASH
    }

    /// Checks if there is no body to complete the header, that is no
    /// transactions and no ommers.
    pub fn is_body_empty(&self) -> bool {
        self.transaction_root_is_empty() && self.ommers_hash_is_empty()
    }

    /// Checks if there are no receipts for this block.
    pub fn is_receipts_empty(&self) -> bool {
        self.receipts_root == EMPTY_ROOT_HASH
    }
}
