//! firmware-core
//!
//! Firmware image header codec.
//! Prepends a fixed 44-byte header (magic, packed version, size, SHA-256)
//! to a raw firmware payload and verifies images carrying that header.
//! No argument parsing, no process exit codes.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec layers
pub mod headers;
pub mod crypto;
pub mod image;

// File and batch wrappers
pub mod io;
pub mod batch;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::{FIRMWARE_MAGIC, HEADER_LEN};
    pub use crate::headers::{FirmwareHeader, FirmwareVersion, HeaderError};
    pub use crate::image::{decode_and_verify, encode, FirmwareImage, ImageError, ImageSummary, VerifiedImage};
    pub use crate::io::{prepare_firmware, verify_firmware_file};
    pub use crate::types::FirmwareError;
}
