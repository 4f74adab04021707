//! Block size selection and the halving retry.

use super::signature::{SignatureBuilder, Signatures, HALF_SPAMSUM_LENGTH, SPAMSUM_LENGTH};
use tracing::{debug, trace};

/// Smallest block size the scheme uses.
pub const MIN_BLOCK_SIZE: u32 = 3;

/// Chooses the block size for an input and runs signature passes until the
/// primary signature is long enough or the minimum block size is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSizeSelector {
    block_size: u32,
}

impl BlockSizeSelector {
    /// Smallest `3 * 2^k` whose 64 pieces cover `len` bytes.
    pub fn for_length(len: usize) -> Self {
        let mut block_size = MIN_BLOCK_SIZE as u64;
        while block_size * (SPAMSUM_LENGTH as u64) < len as u64 {
            block_size *= 2;
        }
        Self {
            block_size: u32::try_from(block_size).unwrap_or(u32::MAX),
        }
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Whether a pass that produced `sig1_len` characters (before the tail
    /// flush) should be redone at half the block size.
    pub fn should_retry(&self, sig1_len: usize) -> bool {
        sig1_len < HALF_SPAMSUM_LENGTH && self.block_size > MIN_BLOCK_SIZE
    }

    /// Runs passes over `data` until the result is accepted.
    pub fn run(mut self, data: &[u8]) -> Signatures {
        debug!(
            len = data.len(),
            block_size = self.block_size,
            "Selected initial block size"
        );
        loop {
            let mut builder = SignatureBuilder::new(self.block_size);
            builder.update_slice(data);
            let sig1_len = builder.sig1_len();
            trace!(block_size = self.block_size, sig1_len, "Signature pass complete");

            if !self.should_retry(sig1_len) {
                return builder.finish();
            }
            self.block_size /= 2;
            debug!(block_size = self.block_size, "Signature too short, halving block size");
        }
    }
}
