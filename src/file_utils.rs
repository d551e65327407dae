use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// @module: File probing utilities shared by the filesystem collaborators

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @returns: File size in bytes
    pub fn file_size<P: AsRef<Path>>(path: P) -> Result<u64> {
        let metadata = fs::metadata(path.as_ref())
            .with_context(|| format!("Failed to stat file: {:?}", path.as_ref()))?;
        Ok(metadata.len())
    }

    /// Read the leading bytes of a file, for type sniffing
    pub fn read_header<P: AsRef<Path>>(path: P, len: usize) -> Result<Vec<u8>> {
        let bytes = fs::read(path.as_ref())
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;
        Ok(bytes.into_iter().take(len).collect())
    }
}

/// Render a byte count with binary units, one decimal place.
/// Rule messages quote both the configured cap and the observed size
/// this way.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
