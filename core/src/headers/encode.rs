// ## 📂 File: `src/headers/encode.rs`
//! src/headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - Serializes `FirmwareHeader` into a fixed 44-byte buffer in little-endian order.
//! - Field order must match `decode.rs` exactly; the bootloader reads these offsets.
//! - Encoding is infallible: every `FirmwareHeader` has a wire form, validation happens on decode.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{HEADER_LEN, OFFSET_MAGIC, OFFSET_SHA256, OFFSET_SIZE, OFFSET_VERSION};
use crate::headers::types::FirmwareHeader;

/// Serialize a `FirmwareHeader` into a 44-byte buffer in little-endian order.
#[inline]
pub fn encode_header_le(h: &FirmwareHeader) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];

    LittleEndian::write_u32(&mut out[OFFSET_MAGIC..OFFSET_VERSION], h.magic);  // 0..4   magic
    LittleEndian::write_u32(&mut out[OFFSET_VERSION..OFFSET_SIZE], h.version); // 4..8   packed version
    LittleEndian::write_u32(&mut out[OFFSET_SIZE..OFFSET_SHA256], h.size);     // 8..12  payload size
    out[OFFSET_SHA256..HEADER_LEN].copy_from_slice(&h.sha256);                 // 12..44 sha256

    out
}

impl FirmwareHeader {
    /// Wire bytes of this header.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        encode_header_le(self)
    }
}
