use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Checker configuration.
///
/// Passed explicitly into the rule set at construction; nothing here is
/// ambient global state. Defaults follow the Interop subtitle spec
/// limits for fonts.
/// Configuration for the subtitle conformance checker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Maximum allowed font file size in bytes
    #[serde(default = "default_font_max_size")]
    pub font_max_size: u64,

    /// Sniffed file types accepted for loaded fonts
    #[serde(default = "default_font_formats")]
    pub font_formats: Vec<String>,
}

fn default_font_max_size() -> u64 {
    // 640 KiB cap from the Interop subtitle spec
    640 * 1024
}

fn default_font_formats() -> Vec<String> {
    vec![
        "TrueType font data".to_string(),
        "OpenType font data".to_string(),
    ]
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            font_max_size: default_font_max_size(),
            font_formats: default_font_formats(),
        }
    }
}

impl CheckerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }
}
