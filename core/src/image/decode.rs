//! src/image/decode.rs
//!
//! Parse the header off an image and check it against the payload.
//!
//! Checks run in a fixed order and stop at the first failure:
//! `TruncatedHeader` → `BadMagic` → `SizeMismatch` → `HashMismatch`.

use crate::constants::HEADER_LEN;
use crate::crypto::verify_sha256;
use crate::headers::decode_header_le;
use crate::image::types::{ImageError, VerifiedImage};

/// Verify `image` and return its header with a borrowed payload slice.
pub fn decode_and_verify(image: &[u8]) -> Result<VerifiedImage<'_>, ImageError> {
    let header = decode_header_le(image)?;
    let version = header.firmware_version();
    if header.has_reserved_version_bits() {
        log::warn!("packed version 0x{:08x} has bits 31..24 set; reading it as {}", header.version, version);
    }
    let payload = &image[HEADER_LEN..];

    if u64::from(header.size) != payload.len() as u64 {
        return Err(ImageError::SizeMismatch {
            declared: header.size,
            actual: payload.len() as u64,
        });
    }

    verify_sha256(payload, &header.sha256)?;

    log::debug!("verified firmware {} ({} payload bytes)", version, header.size);

    Ok(VerifiedImage { header, version, payload })
}
