//! headers/version.rs
//!
//! Semantic version packed into the 32-bit header field.
//!
//! Design notes:
//! - Bits 23..16 major, 15..8 minor, 7..0 patch; bits 31..24 are written as zero and masked off when read.
//! - Components above 255 are rejected, never truncated into the neighbour's bits.
//! - Parsing is strict: decimal digits only, no signs, no empty components.

use std::fmt;
use std::str::FromStr;

use crate::constants::VERSION_COMPONENT_MAX;
use crate::headers::types::HeaderError;

/// Which part of `major.minor.patch` an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionComponent {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VersionComponent::Major => "major",
            VersionComponent::Minor => "minor",
            VersionComponent::Patch => "patch",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl FirmwareVersion {
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self { major, minor, patch }
    }

    /// Parse `"<major>.<minor>.<patch>"`.
    ///
    /// # Returns
    /// - `Err(InvalidVersionFormat)` unless there are exactly three decimal components.
    /// - `Err(VersionComponentOutOfRange)` if a component is above 255.
    pub fn parse(input: &str) -> Result<Self, HeaderError> {
        let format_err = || HeaderError::InvalidVersionFormat { input: input.to_owned() };

        let parts: Vec<&str> = input.trim().split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(format_err());
        };

        // Check every component's shape before range, so "1.x.999" is a format error.
        for part in [major, minor, patch] {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format_err());
            }
        }

        Ok(Self {
            major: component(major, VersionComponent::Major)?,
            minor: component(minor, VersionComponent::Minor)?,
            patch: component(patch, VersionComponent::Patch)?,
        })
    }

    /// `(major << 16) | (minor << 8) | patch`
    #[inline]
    pub const fn pack(self) -> u32 {
        ((self.major as u32) << 16) | ((self.minor as u32) << 8) | self.patch as u32
    }

    /// Inverse of `pack`. Bits 31..24 are ignored.
    #[inline]
    pub const fn unpack(raw: u32) -> Self {
        Self {
            major: ((raw >> 16) & 0xFF) as u8,
            minor: ((raw >> 8) & 0xFF) as u8,
            patch: (raw & 0xFF) as u8,
        }
    }
}

fn component(digits: &str, which: VersionComponent) -> Result<u8, HeaderError> {
    let out_of_range = || HeaderError::VersionComponentOutOfRange {
        component: which,
        value: digits.trim_start_matches('0').to_owned(),
        max: VERSION_COMPONENT_MAX,
    };
    // Digits-only was checked by the caller, so the only parse failure left is overflow.
    let value: u32 = digits.parse().map_err(|_| out_of_range())?;
    u8::try_from(value).map_err(|_| out_of_range())
}

impl FromStr for FirmwareVersion {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
