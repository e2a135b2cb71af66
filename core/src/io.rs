// ## 📂 File: `src/io.rs`
// ## File collaborator: whole-file reads, write-then-rename outputs

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::image::{decode_and_verify, encode, ImageSummary};
use crate::types::FirmwareError;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> FirmwareError + '_ {
    move |source| FirmwareError::Io { path: path.to_path_buf(), source }
}

/// Read the whole firmware file into memory.
pub fn read_firmware(path: &Path) -> Result<Vec<u8>, FirmwareError> {
    fs::read(path).map_err(io_error(path))
}

/// Write `bytes` to `path` so that readers see either the old file or the complete new one.
///
/// The data goes to a temporary file in the destination directory, is synced,
/// then renamed over `path`. On failure the temporary file is removed.
pub fn write_image_atomic(path: &Path, bytes: &[u8]) -> Result<(), FirmwareError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error(path))?;
    tmp.write_all(bytes).map_err(io_error(path))?;
    tmp.as_file().sync_all().map_err(io_error(path))?;
    // PersistError drops its NamedTempFile, which deletes the temporary file.
    tmp.persist(path).map_err(|e| io_error(path)(e.error))?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Read `input`, prepend a header for `version`, write the image to `output`.
///
/// Codec errors are raised before `output` is touched.
pub fn prepare_firmware(input: &Path, output: &Path, version: &str) -> Result<ImageSummary, FirmwareError> {
    let payload = read_firmware(input)?;
    let image = encode(&payload, version)?;
    write_image_atomic(output, image.as_bytes())?;

    let summary = image.summary();
    log::info!(
        "prepared {} -> {}: version {}, {} bytes",
        input.display(),
        output.display(),
        summary.version,
        summary.size,
    );
    Ok(summary)
}

/// Read an image file and run `decode_and_verify` on it.
pub fn verify_firmware_file(path: &Path) -> Result<ImageSummary, FirmwareError> {
    let bytes = read_firmware(path)?;
    match decode_and_verify(&bytes) {
        Ok(verified) => {
            log::info!("{}: valid firmware {}", path.display(), verified.version);
            Ok(verified.summary())
        }
        Err(e) => {
            log::warn!("{}: {}", path.display(), e);
            Err(e.into())
        }
    }
}
