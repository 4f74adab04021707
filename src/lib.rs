//! Context-triggered piecewise hashing (ssdeep-style fuzzy hashes).
//!
//! ```no_run
//! let a = ctph::digest(&std::fs::read("a.bin")?)?;
//! let b = ctph::digest(&std::fs::read("b.bin")?)?;
//! println!("{a} vs {b}: {}", a.compare(&b));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Hashing configuration
pub mod config;
pub mod error;
/// Fuzzy hash generation
pub mod hashing;
pub mod io;
pub mod logging;
/// Fuzzy hash comparison
pub mod similarity;

pub use config::{HashConfig, MIN_INPUT_SIZE};
pub use error::{CtphError, Result};
pub use hashing::{digest, digest_path, digest_reader, digest_with, Digest, FuzzyHash, HashOutcome};
pub use similarity::compare;
