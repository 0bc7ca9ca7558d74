use crate::{Result, ScanConfig, SignatureError};
use std::path::Path;

/// Read a whole document into memory.
///
/// Fails with [`SignatureError::IoError`] when the path is missing or
/// unreadable, and with [`SignatureError::FileSizeExceeded`] when the file is
/// larger than [`ScanConfig::max_file_size`]. The size is checked against the
/// file metadata before anything is read.
pub fn read_pdf_bytes<P: AsRef<Path>>(path: P, config: &ScanConfig) -> Result<Vec<u8>> {
    let path = path.as_ref();

    if let Some(limit) = config.max_file_size {
        let size = std::fs::metadata(path)?.len();
        if size > limit as u64 {
            return Err(SignatureError::FileSizeExceeded {
                path: path.display().to_string(),
                size,
                limit,
            });
        }
    }

    Ok(std::fs::read(path)?)
}
