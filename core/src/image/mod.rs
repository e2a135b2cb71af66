//! image/mod.rs
//! Firmware image = 44-byte header ‖ payload.
//!
//! Invariants of every image produced or accepted here:
//! - `header.size == payload.len()`
//! - `header.sha256 == SHA256(payload)`

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
