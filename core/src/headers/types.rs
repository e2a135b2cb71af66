// ## 📂 File: `src/headers/types.rs`

//! headers/types.rs
//! Core header struct and header-level errors.
//!
//! Layout (44 bytes, little-endian):
//!
//! ```text
//! [ magic   (4)  ] 0xDEADBEEF
//! [ version (4)  ] major << 16 | minor << 8 | patch
//! [ size    (4)  ] payload length in bytes
//! [ sha256  (32) ] digest of the payload
//! ```

use std::fmt;

use thiserror::Error;

use crate::constants::{DIGEST_LEN, FIRMWARE_MAGIC, HEADER_LEN, VERSION_RESERVED_MASK};
use crate::headers::version::{FirmwareVersion, VersionComponent};

/// Decoded firmware header.
/// Fields hold raw wire values; use `firmware_version()` for the typed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FirmwareHeader {
    pub magic: u32,              // always FIRMWARE_MAGIC when valid
    pub version: u32,            // packed semantic version
    pub size: u32,               // payload length
    pub sha256: [u8; DIGEST_LEN], // payload digest
}

impl FirmwareHeader {
    pub const LEN: usize = HEADER_LEN;

    /// Header for a payload of `size` bytes hashing to `sha256`.
    pub fn new(version: FirmwareVersion, size: u32, sha256: [u8; DIGEST_LEN]) -> Self {
        Self {
            magic: FIRMWARE_MAGIC,
            version: version.pack(),
            size,
            sha256,
        }
    }

    pub fn validate(&self) -> Result<(), HeaderError> {
        // Magic
        if self.magic != FIRMWARE_MAGIC {
            return Err(HeaderError::BadMagic {
                have: self.magic,
                need: FIRMWARE_MAGIC,
            });
        }

        Ok(())
    }

    /// Unpacked `major.minor.patch`.
    pub fn firmware_version(&self) -> FirmwareVersion {
        FirmwareVersion::unpack(self.version)
    }

    /// True if bits 31..24 of the packed version are set. Such headers still verify.
    pub fn has_reserved_version_bits(&self) -> bool {
        self.version & VERSION_RESERVED_MASK != 0
    }

    /// Lowercase hex of the recorded digest.
    pub fn sha256_hex(&self) -> String {
        hex::encode(self.sha256)
    }
}

impl fmt::Display for FirmwareHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "firmware {} ({} bytes, sha256 {})", self.firmware_version(), self.size, self.sha256_hex())
    }
}

/// Header-level failures: parsing the version string and reading the 44-byte header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Version string is not three dot-separated decimal integers.
    #[error("InvalidVersionFormat: expected <major>.<minor>.<patch>, got {input:?}")]
    InvalidVersionFormat { input: String },

    /// One version component does not fit in 8 bits.
    #[error("VersionComponentOutOfRange: {component} version {value} exceeds {max}")]
    VersionComponentOutOfRange {
        component: VersionComponent,
        value: String,
        max: u32,
    },

    /// Buffer shorter than a header.
    #[error("TruncatedHeader: image is {have} bytes, header needs {need}")]
    TruncatedHeader { have: usize, need: usize },

    /// Magic marker does not match.
    #[error("BadMagic: expected 0x{need:08x}, got 0x{have:08x}")]
    BadMagic { have: u32, need: u32 },
}

impl HeaderError {
    pub fn kind(&self) -> &'static str {
        use HeaderError::*;
        match self {
            InvalidVersionFormat { .. } => "InvalidVersionFormat",
            VersionComponentOutOfRange { .. } => "VersionComponentOutOfRange",
            TruncatedHeader { .. } => "TruncatedHeader",
            BadMagic { .. } => "BadMagic",
        }
    }
}
