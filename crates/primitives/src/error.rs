/// Errors that can occur during header sanity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// The block number does not fit in 64 bits.
    #[error("too large block number: bitlen {bit_len}")]
    NumberTooLarge {
        /// Bit length of the rejected number.
        bit_len: usize,
    },
    /// The block difficulty exceeds 80 bits.
    #[error("too large block difficulty: bitlen {bit_len}")]
    DifficultyTooLarge {
        /// Bit length of the rejected difficulty.
        bit_len: usize,
    },
    /// The extradata is longer than 100 KiB.
    #[error("too large block extradata: size {len}")]
    ExtraDataTooLarge {
        /// Length of the rejected extradata in bytes.
        len: usize,
    },
    /// The base fee exceeds 256 bits.
    #[error("too large base fee: bitlen {bit_len}")]
    BaseFeeTooLarge {
        /// Bit length of the rejected base fee.
        bit_len: usize,
    },
}
