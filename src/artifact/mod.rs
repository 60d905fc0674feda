//! Read-only access to precomputed artifacts (vectorizer, reference corpus).
//!
//! Artifacts are memory-mapped, fingerprinted and decoded once at startup. Any
//! failure here is a load-time error; nothing in this module runs per query.

pub mod error;


pub use error::{ArtifactError, ArtifactResult};

use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::hashing::{fingerprint_hex, short_fingerprint};

/// A memory-mapped artifact file.
pub struct ArtifactFile {
    mmap: Mmap,
    path: PathBuf,
}

impl std::fmt::Debug for ArtifactFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactFile")
            .field("path", &self.path)
            .field("len", &self.len())
            .finish()
    }
}

impl ArtifactFile {
    pub fn open<P: AsRef<Path>>(path: P) -> ArtifactResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ArtifactError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let io_err = |source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let file_len = file.metadata().map_err(io_err)?.len();
        if file_len == 0 {
            return Err(ArtifactError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        // SAFETY: artifacts are produced offline and never rewritten while the
        // process runs; the mapping is read-only.
        let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;

        debug!(path = %path.display(), len = file_len, "Mapped artifact");

        Ok(Self {
            mmap,
            path: path.to_path_buf(),
        })
    }

    pub fn as_slice(&self) -> &[u8] {
        self.mmap.deref()
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full BLAKE3 fingerprint of the artifact bytes.
    pub fn fingerprint(&self) -> String {
        fingerprint_hex(self.as_slice())
    }

    pub fn short_fingerprint(&self) -> String {
        short_fingerprint(self.as_slice())
    }

    /// Decodes the whole artifact as JSON.
    pub fn parse_json<T: DeserializeOwned>(&self) -> ArtifactResult<T> {
        serde_json::from_slice(self.as_slice()).map_err(|source| ArtifactError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}
