//! src/image/encode.rs
//!
//! Build `header ‖ payload`.
//! Pure function of `(payload, version)`: same input, same bytes.

use crate::constants::{HEADER_LEN, MAX_PAYLOAD_LEN};
use crate::crypto::{digest_hex, sha256};
use crate::headers::{encode_header_le, FirmwareHeader, FirmwareVersion};
use crate::image::types::{FirmwareImage, ImageError};

/// Encode `payload` under a `"<major>.<minor>.<patch>"` version string.
///
/// # Errors
/// - `InvalidVersionFormat` / `VersionComponentOutOfRange` from the version string.
/// - `PayloadTooLarge` if the payload exceeds `u32::MAX` bytes.
pub fn encode(payload: &[u8], version: &str) -> Result<FirmwareImage, ImageError> {
    let version = FirmwareVersion::parse(version)?;
    encode_with_version(payload, version)
}

/// Same as `encode`, with an already parsed version.
pub fn encode_with_version(payload: &[u8], version: FirmwareVersion) -> Result<FirmwareImage, ImageError> {
    let size = u32::try_from(payload.len()).map_err(|_| ImageError::PayloadTooLarge {
        len: payload.len() as u64,
        max: MAX_PAYLOAD_LEN,
    })?;

    let digest = sha256(payload);
    let header = FirmwareHeader::new(version, size, digest);

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&encode_header_le(&header));
    bytes.extend_from_slice(payload);
    debug_assert_eq!(bytes.len(), HEADER_LEN + payload.len());

    log::debug!(
        "encoded firmware {} (packed 0x{:06x}), {} payload bytes, sha256 {}",
        version,
        header.version,
        size,
        digest_hex(&digest),
    );

    Ok(FirmwareImage { header, version, bytes })
}
