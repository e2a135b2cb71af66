use sha2::{Digest as _, Sha256};
use thiserror::Error;

use crate::constants::DIGEST_LEN;

/// Raw SHA-256 output as stored in the header.
pub type Sha256Digest = [u8; DIGEST_LEN];

/// Digest-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    /// Payload does not hash to the digest recorded in the header.
    #[error("HashMismatch: header records sha256 {}, payload hashes to {}", hex::encode(.expected), hex::encode(.actual))]
    HashMismatch {
        expected: Sha256Digest,
        actual: Sha256Digest,
    },
}

impl DigestError {
    pub fn kind(&self) -> &'static str {
        match self {
            DigestError::HashMismatch { .. } => "HashMismatch",
        }
    }
}

/// SHA-256 of `data`.
#[inline]
pub fn sha256(data: &[u8]) -> Sha256Digest {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha256::digest(data));
    out
}

/// Hash `data` and compare against `expected`.
pub fn verify_sha256(data: &[u8], expected: &Sha256Digest) -> Result<(), DigestError> {
    let actual = sha256(data);
    if &actual != expected {
        return Err(DigestError::HashMismatch {
            expected: *expected,
            actual,
        });
    }
    Ok(())
}

/// Lowercase hex rendering used in summaries and logs.
#[inline]
pub fn digest_hex(digest: &Sha256Digest) -> String {
    hex::encode(digest)
}
