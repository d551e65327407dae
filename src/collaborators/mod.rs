/*!
 * External collaborator interfaces consumed by the rule engine.
 *
 * The core never parses XML, unwraps MXF containers or sniffs binary
 * file types itself; it talks to these seams:
 * - `DocumentResolver`: parsed subtitle document for one asset
 * - `ContainerUnwrapper`: scoped extraction folder for wrapped tracks
 * - `FileProbe`: existence, size and type of referenced files
 * - `SchemaValidator`: XML-schema verdict keyed by namespace/label
 *
 * Filesystem-backed probe included; resolver/unwrapper/validator are
 * supplied by the ingesting driver (mocks in [`mock`] for tests).
 */

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::document::{AssetDescriptor, SubtitleDocument};
use crate::errors::ResolutionError;
use crate::file_utils::FileManager;
use crate::schema::Dialect;

pub mod mock;

/// Resolves the parsed subtitle document for one asset.
///
/// For wrapped tracks the `folder` is the already-unwrapped extraction
/// folder; for plain XML assets it is the folder containing the file.
pub trait DocumentResolver: Debug {
    /// Resolve the subtitle document of the given asset
    fn resolve(
        &self,
        asset: &AssetDescriptor,
        folder: &Path,
        dialect: Dialect,
    ) -> Result<SubtitleDocument, ResolutionError>;
}

/// Unwraps a wrapped binary subtitle track into a scoped folder
pub trait ContainerUnwrapper: Debug {
    /// Extract the container at `path`; the returned folder is released
    /// when dropped, on every exit path.
    fn unwrap_container(&self, path: &Path) -> Result<UnwrappedFolder, ResolutionError>;
}

/// Probes files referenced by subtitle documents (fonts, documents)
pub trait FileProbe: Debug {
    /// Whether a regular file exists at the path
    fn exists(&self, path: &Path) -> bool;

    /// Size of the file in bytes
    fn size(&self, path: &Path) -> Result<u64, ResolutionError>;

    /// Sniffed type label of the file (e.g. "TrueType font data")
    fn sniff(&self, path: &Path) -> Result<String, ResolutionError>;
}

/// Verdict of an external XML-schema validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaVerdict {
    /// Document satisfies the schema
    Ok,
    /// Document violates the schema; message describes how
    Violation(String),
}

/// Validates a subtitle document against its XML schema
pub trait SchemaValidator: Debug {
    /// Validate the document at `path` against the schema selected by
    /// namespace, label-set and dialect.
    fn validate(
        &self,
        path: &Path,
        namespace: &str,
        label: &str,
        dialect: Dialect,
    ) -> Result<SchemaVerdict, ResolutionError>;
}

/// Folder holding the content of one asset, optionally temporary.
///
/// When backed by a [`tempfile::TempDir`] the folder is deleted on
/// drop, which scopes extraction folders to the validation of the
/// owning asset.
#[derive(Debug)]
pub struct UnwrappedFolder {
    path: PathBuf,
    _guard: Option<tempfile::TempDir>,
}

impl UnwrappedFolder {
    /// Wrap a temporary extraction folder; deleted when dropped
    pub fn temporary(dir: tempfile::TempDir) -> Self {
        Self { path: dir.path().to_path_buf(), _guard: Some(dir) }
    }

    /// Reference an existing folder that must not be deleted
    pub fn existing<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into(), _guard: None }
    }

    /// Path of the folder
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Filesystem-backed file probe with magic-number font sniffing
#[derive(Debug, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        FileManager::file_exists(path)
    }

    fn size(&self, path: &Path) -> Result<u64, ResolutionError> {
        FileManager::file_size(path).map_err(|e| ResolutionError::Collaborator(e.to_string()))
    }

    fn sniff(&self, path: &Path) -> Result<String, ResolutionError> {
        let header = FileManager::read_header(path, 4)
            .map_err(|e| ResolutionError::Collaborator(e.to_string()))?;

        // Magic numbers of the font containers seen in subtitle packages
        let label = if header.starts_with(&[0x00, 0x01, 0x00, 0x00]) || header.starts_with(b"true")
        {
            "TrueType font data"
        } else if header.starts_with(b"OTTO") {
            "OpenType font data"
        } else if header.starts_with(b"ttcf") {
            "TrueType font collection data"
        } else {
            "data"
        };
        Ok(label.to_string())
    }
}
