//! Textual fuzzy hash: `<block size>:<sig1>:<sig2>[,"<comment>"]`.

use super::signature::{Signatures, ALPHABET, HALF_SPAMSUM_LENGTH, SPAMSUM_LENGTH};
use crate::error::{CtphError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A parsed or freshly computed fuzzy hash.
///
/// `sig2` always belongs to block size `2 * block_size`. The optional
/// comment (usually a file name) is carried for output only and never takes
/// part in comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuzzyHash {
    block_size: u32,
    sig1: String,
    sig2: String,
    comment: Option<String>,
}

fn is_alphabet(c: u8) -> bool {
    ALPHABET.contains(&c)
}

fn validate_sig(sig: &str, max: usize, which: &str) -> Result<()> {
    if sig.len() > max {
        return Err(CtphError::invalid_format(format!(
            "{which} is {} characters long (maximum {max})",
            sig.len()
        )));
    }
    if let Some(bad) = sig.bytes().find(|&c| !is_alphabet(c)) {
        return Err(CtphError::invalid_format(format!(
            "{which} contains invalid character {:?}",
            bad as char
        )));
    }
    Ok(())
}

impl FuzzyHash {
    /// Builds a hash from its parts, enforcing the format's invariants.
    pub fn new(block_size: u32, sig1: impl Into<String>, sig2: impl Into<String>) -> Result<Self> {
        let (sig1, sig2) = (sig1.into(), sig2.into());
        if block_size == 0 {
            return Err(CtphError::invalid_format("block size must be positive"));
        }
        validate_sig(&sig1, SPAMSUM_LENGTH, "first signature")?;
        validate_sig(&sig2, HALF_SPAMSUM_LENGTH, "second signature")?;
        Ok(Self {
            block_size,
            sig1,
            sig2,
            comment: None,
        })
    }

    pub(crate) fn from_signatures(sigs: Signatures) -> Self {
        Self {
            block_size: sigs.block_size,
            sig1: sigs.sig1,
            sig2: sigs.sig2,
            comment: None,
        }
    }

    /// Attaches a comment emitted as `,"<comment>"` by `Display`.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Block size of the secondary signature.
    pub fn double_block_size(&self) -> u64 {
        self.block_size as u64 * 2
    }

    pub fn sig1(&self) -> &str {
        &self.sig1
    }

    pub fn sig2(&self) -> &str {
        &self.sig2
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Similarity score in `0..=100`; see [`crate::similarity`].
    pub fn compare(&self, other: &FuzzyHash) -> u32 {
        crate::similarity::compare_hashes(self, other)
    }
}

impl fmt::Display for FuzzyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.block_size, self.sig1, self.sig2)?;
        if let Some(comment) = &self.comment {
            write!(f, ",\"{}\"", comment)?;
        }
        Ok(())
    }
}

impl FromStr for FuzzyHash {
    type Err = CtphError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim_end_matches(['\r', '\n']);
        if s.is_empty() {
            return Err(CtphError::invalid_format("empty hash"));
        }

        // ',' is outside the alphabet, so the first one starts the comment.
        let (body, comment) = match s.split_once(',') {
            Some((body, rest)) => (body, Some(rest.trim_matches('"').to_string())),
            None => (s, None),
        };

        let fields: Vec<&str> = body.split(':').collect();
        if fields.len() != 3 {
            return Err(CtphError::invalid_format(format!(
                "expected 3 ':'-separated fields, found {}",
                fields.len()
            )));
        }
        // u32::from_str would also take a leading '+'.
        let block_size = Some(fields[0])
            .filter(|f| !f.is_empty() && f.bytes().all(|c| c.is_ascii_digit()))
            .and_then(|f| f.parse::<u32>().ok())
            .ok_or_else(|| {
                CtphError::invalid_format(format!("block size {:?} is not a number", fields[0]))
            })?;

        let mut hash = FuzzyHash::new(block_size, fields[1], fields[2])?;
        hash.comment = comment;
        Ok(hash)
    }
}

impl Serialize for FuzzyHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FuzzyHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
