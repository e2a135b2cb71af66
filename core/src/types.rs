use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::image::ImageError;

/// Unified crate error covering file access and the image codec.
/// - `From<T>` impls enable `?` from the codec up through the file layer.
/// - I/O errors keep the path they were raised for.
#[derive(Debug, Error)]
pub enum FirmwareError {
    /// File could not be read, created, written or renamed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding or verification failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}

impl FirmwareError {
    /// Stable name of the failed invariant, or `"Io"`.
    pub fn kind(&self) -> &'static str {
        match self {
            FirmwareError::Io { .. } => "Io",
            FirmwareError::Image(e) => e.kind(),
        }
    }
}
