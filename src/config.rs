//! Configuration for hashing calls.
//!
//! There is no process-wide state: every top-level hashing call takes a
//! `HashConfig`, normally built once at startup and passed down.

use serde::{Deserialize, Serialize};

/// Inputs at or below this many bytes produce unreliable digests.
pub const MIN_INPUT_SIZE: usize = 4096;

/// Master configuration for hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Reject inputs of `MIN_INPUT_SIZE` bytes or fewer. When false they are
    /// hashed anyway and the condition is reported as a diagnostic.
    pub strict: bool,
    /// I/O configuration for file reading.
    pub io: IOConfig,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            strict: true,
            io: IOConfig::default(),
        }
    }
}

impl HashConfig {
    /// Configuration that tolerates small inputs.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Parses a JSON document; absent fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// I/O limits for file hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOConfig {
    /// Maximum file size that will be mapped and hashed.
    pub max_file_size: u64,
}

impl Default for IOConfig {
    fn default() -> Self {
        Self {
            max_file_size: 512 * 1024 * 1024, // 512MB
        }
    }
}
