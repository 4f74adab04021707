//! Bounded file access for hashing whole files.
//!
//! Fuzzy hashing needs the complete input before the block size can be
//! chosen, so files are memory-mapped read-only and handed to the hasher as
//! a single slice. The size limit guards against mapping absurdly large inputs.

pub mod error;

use crate::config::IOConfig;
use crate::io::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A read-only view of a whole file, backed by a memory map.
pub struct SafeReader {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl SafeReader {
    /// Opens and memory-maps a file, rejecting files larger than
    /// `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening file for hashing"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(IoError::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: read-only map of a regular file; the slice is only borrowed
            // for the lifetime of this reader.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
        })
    }

    /// Returns the total size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    /// Path this reader was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The complete file contents.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.mmap {
            Some(m) => &m[..],
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content).unwrap();
        temp_file
    }

    #[test]
    fn open_file_successfully() {
        let file = create_temp_file(b"hello world");
        let reader = SafeReader::open(file.path(), &IOConfig::default()).unwrap();
        assert_eq!(reader.size(), 11);
        assert_eq!(reader.as_bytes(), b"hello world");
        assert_eq!(reader.path(), file.path());
    }

    #[test]
    fn open_file_too_large() {
        let file = create_temp_file(&[0; 100]);
        let limits = IOConfig { max_file_size: 50 };
        let result = SafeReader::open(file.path(), &limits);
        assert!(matches!(
            result,
            Err(IoError::FileTooLarge {
                limit: 50,
                found: 100
            })
        ));
    }

    #[test]
    fn open_missing_file() {
        let result = SafeReader::open("definitely/not/here.bin", &IOConfig::default());
        assert!(matches!(result, Err(IoError::StdIo(_))));
    }

    #[test]
    fn open_empty_file() {
        let file = create_temp_file(b"");
        let reader = SafeReader::open(file.path(), &IOConfig::default()).unwrap();
        assert_eq!(reader.size(), 0);
        assert!(reader.as_bytes().is_empty());
    }
}
