/// Magic number marking a firmware header.
/// Stored little-endian, so the first four bytes on disk are `EF BE AD DE`.
pub const FIRMWARE_MAGIC: u32 = 0xDEAD_BEEF;

/// Fixed header size in bytes: magic + version + size + SHA-256.
pub const HEADER_LEN: usize = 4 // magic
    + 4                         // packed version
    + 4                         // payload size
    + DIGEST_LEN;               // sha256

/// SHA-256 digest length.
pub const DIGEST_LEN: usize = 32;

/// Largest payload the 32-bit size field can describe.
pub const MAX_PAYLOAD_LEN: u64 = u32::MAX as u64;

/// Each packed version component owns 8 bits.
pub const VERSION_COMPONENT_MAX: u32 = u8::MAX as u32;

/// Bits 31..24 of the packed version are never written by the encoder and ignored on decode.
pub const VERSION_RESERVED_MASK: u32 = 0xFF00_0000;

// Field offsets inside the header.
pub const OFFSET_MAGIC: usize = 0;
pub const OFFSET_VERSION: usize = 4;
pub const OFFSET_SIZE: usize = 8;
pub const OFFSET_SHA256: usize = 12;
