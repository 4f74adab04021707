//! Piecewise signature generation for one candidate block size.
//!
//! Every byte feeds two piece hashes and the shared rolling checksum. When
//! the checksum hits the trigger value for block size `b` (or `2b`) the
//! current piece hash is emitted as one base64 character and restarted.

use super::rolling::RollingHash;

/// Base64 alphabet used for signature characters.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Maximum length of the primary signature.
pub const SPAMSUM_LENGTH: usize = 64;

/// Maximum length of the secondary (double block size) signature.
pub const HALF_SPAMSUM_LENGTH: usize = SPAMSUM_LENGTH / 2;

// FNV-1 32-bit prime and the scheme's seed. Only `hash % 64` is ever
// emitted, so the low 8 bits of each carry the whole state.
const HASH_PRIME: u8 = 0x0100_0193_u32 as u8;
const HASH_INIT: u8 = 0x2802_1967_u32 as u8;

#[inline]
fn sum_hash(c: u8, h: u8) -> u8 {
    h.wrapping_mul(HASH_PRIME) ^ c
}

#[inline]
fn b64(h: u8) -> char {
    ALPHABET[(h % 64) as usize] as char
}

/// Signature pair produced by one pass over the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signatures {
    pub block_size: u32,
    pub sig1: String,
    pub sig2: String,
}

/// Single-pass signature generator for a fixed block size.
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    block_size: u32,
    rolling: RollingHash,
    hash1: u8,
    hash2: u8,
    sig1: String,
    sig2: String,
}

impl SignatureBuilder {
    pub fn new(block_size: u32) -> Self {
        debug_assert!(block_size > 0);
        Self {
            block_size,
            rolling: RollingHash::new(),
            hash1: HASH_INIT,
            hash2: HASH_INIT,
            sig1: String::with_capacity(SPAMSUM_LENGTH),
            sig2: String::with_capacity(HALF_SPAMSUM_LENGTH),
        }
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Characters emitted so far on the primary channel, tail excluded.
    pub fn sig1_len(&self) -> usize {
        self.sig1.len()
    }

    #[inline]
    pub fn update(&mut self, c: u8) {
        self.hash1 = sum_hash(c, self.hash1);
        self.hash2 = sum_hash(c, self.hash2);
        self.rolling.update(c);

        let rh = self.rolling.checksum() as u64;
        let b = self.block_size as u64;

        // The last slot of each signature is reserved for the tail piece.
        if rh % b == b - 1 && self.sig1.len() < SPAMSUM_LENGTH - 1 {
            self.sig1.push(b64(self.hash1));
            self.hash1 = HASH_INIT;
        }
        if rh % (2 * b) == 2 * b - 1 && self.sig2.len() < HALF_SPAMSUM_LENGTH - 1 {
            self.sig2.push(b64(self.hash2));
            self.hash2 = HASH_INIT;
        }
    }

    pub fn update_slice(&mut self, data: &[u8]) {
        for &c in data {
            self.update(c);
        }
    }

    /// Closes the pass, emitting the tail piece when the window saw content.
    pub fn finish(mut self) -> Signatures {
        if self.rolling.checksum() != 0 {
            self.sig1.push(b64(self.hash1));
            self.sig2.push(b64(self.hash2));
        }
        Signatures {
            block_size: self.block_size,
            sig1: self.sig1,
            sig2: self.sig2,
        }
    }
}
