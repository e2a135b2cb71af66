// ## 📂 File: `src/headers/decode.rs`
//! src/headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Reads the first 44 bytes of a buffer into a `FirmwareHeader`; trailing bytes are the payload.
//! - Field order must match `encode.rs` exactly.
//! - Validation runs after decoding, so a bad magic is reported before anything else about the header.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{DIGEST_LEN, HEADER_LEN, OFFSET_MAGIC, OFFSET_SHA256, OFFSET_SIZE, OFFSET_VERSION};
use crate::headers::types::{FirmwareHeader, HeaderError};

/// Deserialize and validate a 44-byte little-endian header.
///
/// # Returns
/// - `Ok(FirmwareHeader)` if the buffer holds a full header with the right magic.
/// - `Err(HeaderError::TruncatedHeader)` if `buf` is shorter than 44 bytes.
/// - `Err(HeaderError::BadMagic)` from `validate()`.
#[inline]
pub fn decode_header_le(buf: &[u8]) -> Result<FirmwareHeader, HeaderError> {
    if buf.len() < HEADER_LEN {
        return Err(HeaderError::TruncatedHeader { have: buf.len(), need: HEADER_LEN });
    }

    let mut sha256 = [0u8; DIGEST_LEN];
    sha256.copy_from_slice(&buf[OFFSET_SHA256..HEADER_LEN]);

    let h = FirmwareHeader {
        magic: LittleEndian::read_u32(&buf[OFFSET_MAGIC..OFFSET_VERSION]),
        version: LittleEndian::read_u32(&buf[OFFSET_VERSION..OFFSET_SIZE]),
        size: LittleEndian::read_u32(&buf[OFFSET_SIZE..OFFSET_SHA256]),
        sha256,
    };

    h.validate()?;

    Ok(h)
}
