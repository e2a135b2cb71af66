//! headers/mod.rs
//! Public module export for the firmware image header.
//!
//! Notes:
//! - Fixed-size header (44 bytes) precedes the raw payload, nothing follows it.
//! - Little-endian across all multi-byte integers.
//! - One header layout only; there is no version field for the header itself.

pub mod types;
pub mod version;
pub mod encode;
pub mod decode;

pub use types::*;
pub use version::*;
pub use encode::*;
pub use decode::*;
