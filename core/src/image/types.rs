// ## 📂 File: `src/image/types.rs`

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::HEADER_LEN;
use crate::crypto::DigestError;
use crate::headers::{FirmwareHeader, FirmwareVersion, HeaderError};

/// Encoded image, owned.
/// Constructed once by `encode` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareImage {
    pub(crate) header: FirmwareHeader,
    pub(crate) version: FirmwareVersion,
    pub(crate) bytes: Vec<u8>,
}

impl FirmwareImage {
    pub fn header(&self) -> &FirmwareHeader {
        &self.header
    }

    pub fn version(&self) -> FirmwareVersion {
        self.version
    }

    /// Header followed by payload, ready to be written out.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn summary(&self) -> ImageSummary {
        ImageSummary::new(self.version, &self.header)
    }
}

/// Image that passed `decode_and_verify`. Borrows the payload from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedImage<'a> {
    pub header: FirmwareHeader,
    pub version: FirmwareVersion,
    pub payload: &'a [u8],
}

impl VerifiedImage<'_> {
    pub fn summary(&self) -> ImageSummary {
        ImageSummary::new(self.version, &self.header)
    }
}

/// Reporting record for one image: what the console and `--json` print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSummary {
    pub version: String,
    pub size: u32,
    pub sha256: String,
}

impl ImageSummary {
    fn new(version: FirmwareVersion, header: &FirmwareHeader) -> Self {
        Self {
            version: version.to_string(),
            size: header.size,
            sha256: header.sha256_hex(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Image-level failures. Each message starts with the name of the invariant that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Version string or header field problem.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// Payload does not match the recorded digest.
    #[error(transparent)]
    Digest(#[from] DigestError),

    /// Payload longer than the 32-bit size field can express.
    #[error("PayloadTooLarge: payload is {len} bytes, the size field holds at most {max}")]
    PayloadTooLarge { len: u64, max: u64 },

    /// Header size field disagrees with the bytes that follow it.
    #[error("SizeMismatch: header declares {declared} payload bytes, image carries {actual}")]
    SizeMismatch { declared: u32, actual: u64 },
}

impl ImageError {
    /// Stable invariant name, e.g. `"HashMismatch"`.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageError::Header(e) => e.kind(),
            ImageError::Digest(e) => e.kind(),
            ImageError::PayloadTooLarge { .. } => "PayloadTooLarge",
            ImageError::SizeMismatch { .. } => "SizeMismatch",
        }
    }
}
