//! Fuzzy hash comparison.
//!
//! Two hashes are comparable when their block sizes are equal or one is
//! exactly double the other; the signatures that share a block size are then
//! scored by weighted edit distance. Incomparable hashes score 0.

pub mod edit;

use crate::error::Result;
use crate::hashing::block_size::MIN_BLOCK_SIZE;
use crate::hashing::rolling::ROLLING_WINDOW;
use crate::hashing::FuzzyHash;
use edit::{collapse_runs, edit_distance};

/// Block sizes at or above this never need their score capped.
const CAP_FREE_BLOCK_SIZE: u64 =
    (99 + ROLLING_WINDOW as u64) / ROLLING_WINDOW as u64 * MIN_BLOCK_SIZE as u64;

/// Parses two textual hashes and scores them in `0..=100`.
///
/// Any trailing `,"comment"` is ignored. Malformed input is an error.
pub fn compare(a: &str, b: &str) -> Result<u32> {
    let a: FuzzyHash = a.parse()?;
    let b: FuzzyHash = b.parse()?;
    Ok(compare_hashes(&a, &b))
}

/// Scores two parsed hashes in `0..=100`.
pub fn compare_hashes(a: &FuzzyHash, b: &FuzzyHash) -> u32 {
    let (bs_a, bs_b) = (a.block_size() as u64, b.block_size() as u64);

    if bs_a == bs_b && a.sig1() == b.sig1() {
        return 100;
    }
    if bs_a != bs_b && bs_a != bs_b * 2 && bs_b != bs_a * 2 {
        return 0;
    }

    let a1 = collapse_runs(a.sig1().as_bytes());
    let a2 = collapse_runs(a.sig2().as_bytes());
    let b1 = collapse_runs(b.sig1().as_bytes());
    let b2 = collapse_runs(b.sig2().as_bytes());

    if bs_a == bs_b {
        let s1 = score_strings(&a1, &b1, bs_a);
        let s2 = score_strings(&a2, &b2, bs_a * 2);
        s1.max(s2)
    } else if bs_a == bs_b * 2 {
        score_strings(&a1, &b2, bs_a)
    } else {
        score_strings(&a2, &b1, bs_b)
    }
}

/// Scores two signatures that were produced at `block_size`.
pub fn score_strings(s1: &[u8], s2: &[u8], block_size: u64) -> u32 {
    match (s1.is_empty(), s2.is_empty()) {
        (true, true) => return 100,
        (true, false) | (false, true) => return 0,
        _ => {}
    }

    let total = (s1.len() + s2.len()) as u32;
    let dist = edit_distance(s1, s2);
    let score = 100u32.saturating_sub(dist * 100 / total);

    // Small block sizes match by chance too easily.
    if block_size >= CAP_FREE_BLOCK_SIZE {
        return score;
    }
    let cap = block_size / MIN_BLOCK_SIZE as u64 * s1.len().min(s2.len()) as u64;
    score.min(cap.min(100) as u32)
}
