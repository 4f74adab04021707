//! Common test utilities and helpers.
//!
//! Deterministic input generators shared by the integration tests, plus
//! temporary-file helpers.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// One line of the synthetic text corpus.
pub fn text_line(i: usize) -> String {
    format!("line {i}: the quick brown fox jumps over the lazy dog\n")
}

/// `lines` numbered lines of text, about 53 bytes each.
pub fn text_input(lines: usize) -> Vec<u8> {
    (0..lines).flat_map(|i| text_line(i).into_bytes()).collect()
}

/// Bytes from a 64-bit LCG (Knuth's MMIX constants), high bits first.
pub fn pseudo_random(len: usize, mut seed: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (seed >> 33) as u8
        })
        .collect()
}

/// Creates a temporary file with the given content.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// Every character of both signatures in the digest alphabet.
pub fn in_alphabet(s: &str) -> bool {
    s.bytes()
        .all(|c| c.is_ascii_alphanumeric() || c == b'+' || c == b'/')
}
