//! Fuzzy hash generation.
//!
//! The block size depends on the total input length, so [`Digest`] buffers
//! everything it is fed and does the real work in [`Digest::finalize`].
//! Memory use is proportional to the input.

pub mod block_size;
pub mod digest;
pub mod rolling;
pub mod signature;

use crate::config::{HashConfig, MIN_INPUT_SIZE};
use crate::error::{CtphError, Result};
use crate::io::SafeReader;
use block_size::BlockSizeSelector;
pub use digest::FuzzyHash;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::warn;

/// A finished hash plus any condition that was tolerated to produce it.
#[derive(Debug)]
pub struct HashOutcome {
    pub hash: FuzzyHash,
    /// Set when a non-strict configuration let a `TooSmallInput` through.
    pub diagnostic: Option<CtphError>,
}

impl HashOutcome {
    pub fn into_hash(self) -> FuzzyHash {
        self.hash
    }
}

/// Streaming fuzzy hasher.
///
/// Chunk boundaries of `append` calls never affect the result.
#[derive(Debug, Clone, Default)]
pub struct Digest {
    buffer: Vec<u8>,
}

impl Digest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Number of bytes buffered so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discards buffered input so the hasher can be reused.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Computes the hash, rejecting inputs of `MIN_INPUT_SIZE` bytes or fewer.
    pub fn finalize(self) -> Result<FuzzyHash> {
        self.finalize_with(&HashConfig::default())
            .map(HashOutcome::into_hash)
    }

    /// Computes the hash under `config`.
    ///
    /// With `strict` unset a too-small input is still hashed; the
    /// `TooSmallInput` condition is returned in [`HashOutcome::diagnostic`].
    pub fn finalize_with(self, config: &HashConfig) -> Result<HashOutcome> {
        let len = self.buffer.len();
        let mut diagnostic = None;
        if len <= MIN_INPUT_SIZE {
            let err = CtphError::TooSmallInput {
                len,
                min: MIN_INPUT_SIZE,
            };
            if config.strict {
                return Err(err);
            }
            warn!(len, min = MIN_INPUT_SIZE, "Hashing input below the minimum size");
            diagnostic = Some(err);
        }

        let sigs = BlockSizeSelector::for_length(len).run(&self.buffer);
        Ok(HashOutcome {
            hash: FuzzyHash::from_signatures(sigs),
            diagnostic,
        })
    }
}

impl Write for Digest {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// One-shot strict hash of `data`.
pub fn digest(data: &[u8]) -> Result<FuzzyHash> {
    let mut d = Digest::new();
    d.append(data);
    d.finalize()
}

/// One-shot hash of `data` under `config`.
pub fn digest_with(data: &[u8], config: &HashConfig) -> Result<HashOutcome> {
    let mut d = Digest::new();
    d.append(data);
    d.finalize_with(config)
}

/// Drains `reader` and hashes its contents.
pub fn digest_reader<R: Read>(mut reader: R, config: &HashConfig) -> Result<HashOutcome> {
    let mut d = Digest::new();
    io::copy(&mut reader, &mut d)?;
    d.finalize_with(config)
}

/// Hashes the file at `path`.
///
/// I/O failures are always returned; `config.strict` only governs the
/// small-input condition.
pub fn digest_path<P: AsRef<Path>>(path: P, config: &HashConfig) -> Result<HashOutcome> {
    let reader = SafeReader::open(path, &config.io)?;
    digest_with(reader.as_bytes(), config)
}
