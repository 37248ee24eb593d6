//! Content hashing for files
//!
//! Every supported algorithm is a variant of [`HashAlgorithm`] and maps to a
//! concrete streaming hasher at compile time. Names are resolved once, up
//! front, so an unknown algorithm never reaches a scan.

use crate::error::IntegrityError;
use crate::types::Digest;
use serde::Serialize;
use sha2::{Digest as _, Sha224, Sha256, Sha384, Sha512};
use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

/// Read size used by [`hash_file`]. Any size yields the same digest.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Supported content hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Blake3,
}

impl HashAlgorithm {
    /// All supported algorithms, in display order.
    pub fn all() -> &'static [HashAlgorithm] {
        &[
            HashAlgorithm::Sha224,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
            HashAlgorithm::Blake3,
        ]
    }

    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|a| a.as_str()).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// Length of a digest in hex characters.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha224 => 56,
            HashAlgorithm::Sha256 | HashAlgorithm::Blake3 => 64,
            HashAlgorithm::Sha384 => 96,
            HashAlgorithm::Sha512 => 128,
        }
    }

    fn streaming(&self) -> StreamingHasher {
        match self {
            HashAlgorithm::Sha224 => StreamingHasher::Sha224(Sha224::new()),
            HashAlgorithm::Sha256 => StreamingHasher::Sha256(Sha256::new()),
            HashAlgorithm::Sha384 => StreamingHasher::Sha384(Sha384::new()),
            HashAlgorithm::Sha512 => StreamingHasher::Sha512(Sha512::new()),
            HashAlgorithm::Blake3 => StreamingHasher::Blake3(Box::new(blake3::Hasher::new())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = IntegrityError;

    /// Accepts names case-insensitively, with or without a dash (`SHA-256`).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        HashAlgorithm::all()
            .iter()
            .copied()
            .find(|algorithm| algorithm.as_str() == normalized)
            .ok_or_else(|| IntegrityError::UnsupportedAlgorithm(name.to_string()))
    }
}

enum StreamingHasher {
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Blake3(Box<blake3::Hasher>),
}

impl StreamingHasher {
    fn update(&mut self, chunk: &[u8]) {
        match self {
            StreamingHasher::Sha224(h) => h.update(chunk),
            StreamingHasher::Sha256(h) => h.update(chunk),
            StreamingHasher::Sha384(h) => h.update(chunk),
            StreamingHasher::Sha512(h) => h.update(chunk),
            StreamingHasher::Blake3(h) => {
                h.update(chunk);
            }
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            StreamingHasher::Sha224(h) => hex::encode(h.finalize()),
            StreamingHasher::Sha256(h) => hex::encode(h.finalize()),
            StreamingHasher::Sha384(h) => hex::encode(h.finalize()),
            StreamingHasher::Sha512(h) => hex::encode(h.finalize()),
            StreamingHasher::Blake3(h) => h.finalize().to_hex().to_string(),
        }
    }
}

/// Hash a byte stream, reading `chunk_size` bytes at a time.
///
/// A chunk size of zero is treated as one byte.
pub fn hash_reader<R: Read>(
    mut reader: R,
    algorithm: HashAlgorithm,
    chunk_size: usize,
) -> std::io::Result<Digest> {
    let mut hasher = algorithm.streaming();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(Digest::new(hasher.finalize_hex()))
}

/// Hash the content of the file at `path`.
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> Result<Digest, IntegrityError> {
    let file = File::open(path).map_err(|e| IntegrityError::io(path, e))?;
    hash_reader(file, algorithm, DEFAULT_CHUNK_SIZE).map_err(|e| IntegrityError::io(path, e))
}

/// Hash an in-memory buffer
pub fn hash_bytes(data: &[u8], algorithm: HashAlgorithm) -> Digest {
    let mut hasher = algorithm.streaming();
    hasher.update(data);
    Digest::new(hasher.finalize_hex())
}
